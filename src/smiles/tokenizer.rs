use tracing::warn;

use crate::atom::Atom;
use crate::bond::Bond;
use crate::configuration::Configuration;
use crate::element::Element;
use crate::smiles::char_buffer::CharBuffer;
use crate::smiles::error::{SmilesError, SmilesWarning};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Atom(AtomToken),
    Bond { bond: Bond, pos: usize },
    Ring { number: u16, pos: usize },
    OpenParen(usize),
    CloseParen(usize),
    Dot(usize),
}

impl Token {
    pub fn pos(&self) -> usize {
        match self {
            Token::Atom(a) => a.pos,
            Token::Bond { pos, .. } | Token::Ring { pos, .. } => *pos,
            Token::OpenParen(pos) | Token::CloseParen(pos) | Token::Dot(pos) => *pos,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomToken {
    pub atom: Atom,
    pub configuration: Configuration,
    pub pos: usize,
}

/// Splits a SMILES line into tokens.
///
/// Reading stops at the first whitespace; the rest of the line, trimmed,
/// is the title.
pub struct Tokenizer {
    buf: CharBuffer,
    loose: bool,
    title: Option<String>,
    warnings: Vec<SmilesWarning>,
}

impl Tokenizer {
    /// `loose` turns unrecognized bracket atoms into arbitrary atoms (with
    /// a warning) instead of errors.
    pub fn new(input: &str, loose: bool) -> Self {
        Self {
            buf: CharBuffer::new(input),
            loose,
            title: None,
            warnings: Vec::new(),
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn take_warnings(&mut self) -> Vec<SmilesWarning> {
        std::mem::take(&mut self.warnings)
    }

    pub fn position(&self) -> usize {
        self.buf.position()
    }

    pub fn next_token(&mut self) -> Result<Option<Token>, SmilesError> {
        let Some(c) = self.buf.peek() else {
            return Ok(None);
        };
        let pos = self.buf.position();
        if c.is_whitespace() {
            let rest = self.buf.rest();
            let title = rest.trim();
            if !title.is_empty() {
                self.title = Some(title.to_string());
            }
            return Ok(None);
        }
        self.buf.next_char();

        let token = match c {
            '[' => Token::Atom(self.bracket_atom(pos)?),
            'B' if self.buf.next_is('r') => organic(Element::Br, pos),
            'C' if self.buf.next_is('l') => organic(Element::Cl, pos),
            'B' => organic(Element::B, pos),
            'C' => organic(Element::C, pos),
            'N' => organic(Element::N, pos),
            'O' => organic(Element::O, pos),
            'P' => organic(Element::P, pos),
            'S' => organic(Element::S, pos),
            'F' => organic(Element::F, pos),
            'I' => organic(Element::I, pos),
            '*' => organic(Element::Unknown, pos),
            'b' => aromatic(Element::B, pos),
            'c' => aromatic(Element::C, pos),
            'n' => aromatic(Element::N, pos),
            'o' => aromatic(Element::O, pos),
            'p' => aromatic(Element::P, pos),
            's' => aromatic(Element::S, pos),
            '(' => Token::OpenParen(pos),
            ')' => Token::CloseParen(pos),
            '.' => Token::Dot(pos),
            '%' => {
                let number = match (self.buf.digit(), self.buf.digit()) {
                    (Some(a), Some(b)) => (a * 10 + b) as u16,
                    _ => return Err(SmilesError::InvalidRingNumber { pos }),
                };
                Token::Ring { number, pos }
            }
            d if d.is_ascii_digit() => Token::Ring {
                number: d.to_digit(10).unwrap_or(0) as u16,
                pos,
            },
            ch => match Bond::from_symbol(ch) {
                Some(bond) => Token::Bond { bond, pos },
                None => return Err(SmilesError::UnexpectedChar { pos, ch }),
            },
        };
        Ok(Some(token))
    }

    /// Everything between `[` (already consumed, at `start`) and `]`.
    fn bracket_atom(&mut self, start: usize) -> Result<AtomToken, SmilesError> {
        let isotope = self.isotope()?;
        let element_pos = self.buf.position();
        let (element, is_aromatic) = match self.element(start)? {
            Some(found) => found,
            None if self.loose => return self.arbitrary(start, element_pos),
            None => {
                let text = self.symbol_text();
                return Err(SmilesError::InvalidElement {
                    pos: element_pos,
                    text,
                });
            }
        };
        let configuration = Configuration::read(&mut self.buf)?;
        let hydrogens = self.hcount();
        let charge = self.charge(start)?;
        let atom_class = self.atom_class()?;

        match self.buf.next_char() {
            Some(']') => {}
            None => return Err(SmilesError::UnclosedBracket { pos: start }),
            Some(ch) => {
                return Err(SmilesError::UnexpectedChar {
                    pos: self.buf.position() - 1,
                    ch,
                })
            }
        }

        Ok(AtomToken {
            atom: Atom {
                element,
                isotope,
                charge,
                hydrogens: Some(hydrogens),
                aromatic: is_aromatic,
                atom_class,
                label: None,
                bracket: true,
            },
            configuration,
            pos: start,
        })
    }

    fn isotope(&mut self) -> Result<Option<u16>, SmilesError> {
        let pos = self.buf.position();
        let mut value: Option<u16> = None;
        while let Some(d) = self.buf.digit() {
            let next = value
                .unwrap_or(0)
                .checked_mul(10)
                .and_then(|v| v.checked_add(d as u16))
                .ok_or(SmilesError::InvalidIsotope { pos })?;
            value = Some(next);
        }
        Ok(value)
    }

    /// Element symbol inside brackets, `None` if it is not one.
    fn element(&mut self, start: usize) -> Result<Option<(Element, bool)>, SmilesError> {
        let Some(first) = self.buf.peek() else {
            return Err(SmilesError::UnclosedBracket { pos: start });
        };
        if first == '*' {
            self.buf.next_char();
            return Ok(Some((Element::Unknown, false)));
        }
        if first.is_ascii_lowercase() {
            return self.aromatic_element();
        }
        if !first.is_ascii_uppercase() {
            return Ok(None);
        }
        if let Some(second) = self.buf.peek_at(1).filter(|c| c.is_ascii_lowercase()) {
            let symbol: String = [first, second].iter().collect();
            if let Some(e) = Element::from_symbol(&symbol) {
                self.buf.next_char();
                self.buf.next_char();
                return Ok(Some((e, false)));
            }
        }
        match Element::from_symbol(&first.to_string()) {
            Some(e) => {
                self.buf.next_char();
                Ok(Some((e, false)))
            }
            None => Ok(None),
        }
    }

    fn aromatic_element(&mut self) -> Result<Option<(Element, bool)>, SmilesError> {
        let pos = self.buf.position();
        let Some(first) = self.buf.peek() else {
            return Ok(None);
        };
        let mut candidates = vec![first.to_string()];
        if let Some(second) = self.buf.peek_at(1).filter(|c| c.is_ascii_lowercase()) {
            candidates.insert(0, [first, second].iter().collect());
        }
        for symbol in candidates {
            if let Some(e) = Element::from_aromatic_symbol(&symbol) {
                for _ in 0..symbol.len() {
                    self.buf.next_char();
                }
                return Ok(Some((e, true)));
            }
            // A real element that simply has no aromatic form.
            let mut upper = symbol.clone();
            upper[..1].make_ascii_uppercase();
            if Element::from_symbol(&upper).is_some() && !self.loose {
                return Err(SmilesError::InvalidAromatic { pos, text: symbol });
            }
        }
        Ok(None)
    }

    /// Letters at the cursor, for error messages.
    fn symbol_text(&self) -> String {
        let mut text = String::new();
        let mut i = 0;
        while let Some(c) = self.buf.peek_at(i).filter(|c| c.is_ascii_alphabetic()) {
            text.push(c);
            i += 1;
        }
        if text.is_empty() {
            if let Some(c) = self.buf.peek() {
                text.push(c);
            }
        }
        text
    }

    /// Take the whole bracket as a verbatim label.
    fn arbitrary(&mut self, start: usize, element_pos: usize) -> Result<AtomToken, SmilesError> {
        while !self.buf.next_is(']') {
            if self.buf.next_char().is_none() {
                return Err(SmilesError::UnclosedBracket { pos: start });
            }
        }
        let text = self.buf.substring(start);
        let label = text[1..text.len() - 1].to_string();
        if label.is_empty() {
            return Err(SmilesError::InvalidElement {
                pos: element_pos,
                text,
            });
        }
        let warning = SmilesWarning::new(
            element_pos,
            format!("unrecognized atom '{text}' kept as an arbitrary label"),
        );
        warn!(pos = warning.pos, "{}", warning.message);
        self.warnings.push(warning);
        Ok(AtomToken {
            atom: Atom::arbitrary(label),
            configuration: Configuration::Unknown,
            pos: start,
        })
    }

    fn hcount(&mut self) -> u8 {
        if !self.buf.next_is('H') {
            return 0;
        }
        self.buf.digit().map_or(1, |d| d as u8)
    }

    fn charge(&mut self, start: usize) -> Result<i8, SmilesError> {
        let sign: i8 = if self.buf.next_is('+') {
            1
        } else if self.buf.next_is('-') {
            -1
        } else {
            return Ok(0);
        };
        let symbol = if sign > 0 { '+' } else { '-' };

        if let Some(n) = self.buf.number(2) {
            return i8::try_from(n)
                .ok()
                .and_then(|n| n.checked_mul(sign))
                .ok_or(SmilesError::InvalidCharge { pos: start });
        }
        let mut charge = sign;
        while self.buf.next_is(symbol) {
            charge = charge
                .checked_add(sign)
                .ok_or(SmilesError::InvalidCharge { pos: start })?;
        }
        Ok(charge)
    }

    fn atom_class(&mut self) -> Result<u16, SmilesError> {
        let pos = self.buf.position();
        if !self.buf.next_is(':') {
            return Ok(0);
        }
        let mut value: Option<u16> = None;
        while let Some(d) = self.buf.digit() {
            let next = value
                .unwrap_or(0)
                .checked_mul(10)
                .and_then(|v| v.checked_add(d as u16))
                .ok_or(SmilesError::InvalidAtomClass { pos })?;
            value = Some(next);
        }
        value.ok_or(SmilesError::InvalidAtomClass { pos })
    }
}

fn organic(element: Element, pos: usize) -> Token {
    Token::Atom(AtomToken {
        atom: Atom::organic(element),
        configuration: Configuration::Unknown,
        pos,
    })
}

fn aromatic(element: Element, pos: usize) -> Token {
    Token::Atom(AtomToken {
        atom: Atom::aromatic(element),
        configuration: Configuration::Unknown,
        pos,
    })
}

/// Tokenize a whole line (strictly), discarding the title.
pub fn tokenize(input: &str) -> Result<Vec<Token>, SmilesError> {
    let mut tokenizer = Tokenizer::new(input, false);
    let mut tokens = Vec::new();
    while let Some(token) = tokenizer.next_token()? {
        tokens.push(token);
    }
    Ok(tokens)
}
