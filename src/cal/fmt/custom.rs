//! Formatting and reading civil values with `format!`-like layout strings.
//!
//! A layout such as `"{_:M} {:D}, {:Y}"` is compiled once with
//! `DateFormat::parse`, then used to write values out with `format`, or to
//! pick fields out of text with `read`. Each field goes in braces: a colon
//! then a letter names the field, and anything before the colon sets the
//! alignment (`<`, `^`, `>`), the width, zero-padding (`0`), and, for
//! names, the long form (`_`).
//!
//! | Field   | Meaning                              |
//! |---------|--------------------------------------|
//! | `{:Y}`  | year                                 |
//! | `{:y}`  | last two digits of the year          |
//! | `{:M}`  | month name (`{_:M}` for the long one)|
//! | `{:n}`  | month number                         |
//! | `{:D}`  | day of the month                     |
//! | `{:E}`  | weekday name (`{_:E}` for the long one) |
//! | `{:h}`  | hour                                 |
//! | `{:m}`  | minute                               |
//! | `{:s}`  | second                               |
//! | `{:f}`  | fraction of a second                 |
//!
//! ```
//! use civiltime::fmt::DateFormat;
//! use civiltime::LocalDateTime;
//!
//! let layout = DateFormat::parse("{_:M} {:D}, {:Y} at {02>:h}:{02>:m}").unwrap();
//! let when: LocalDateTime = "1969-07-20T20:17:00".parse().unwrap();
//! assert_eq!(layout.format(&when, &locale::Time::english()), "July 20, 1969 at 20:17");
//! ```

use std::error::Error as ErrorTrait;
use std::fmt;
use std::str::CharIndices;

use crate::cal::{DatePiece, TimePiece};
use crate::cal::datetime::{LocalDate, LocalTime, LocalDateTime, Weekday, Error};

use num_traits::{Num, PrimInt};
use pad::{PadStr, Alignment};


/// The layout `from_default_text` reads dates with.
pub const DEFAULT_DATE_LAYOUT: &str = "{:Y}-{02>:n}-{02>:D}";

/// The layout `from_default_text` reads times with.
pub const DEFAULT_TIME_LAYOUT: &str = "{02>:h}:{02>:m}:{02>:s}";

/// The layout `from_default_text` reads date-times with.
pub const DEFAULT_DATE_TIME_LAYOUT: &str = "{:Y}-{02>:n}-{02>:D} {02>:h}:{02>:m}:{02>:s}";


/// English weekday names, from Sunday.
const LONG_DAY_NAMES: [&str; 7] = [
    "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
];

/// The long name of a weekday. `locale` 0.2 returns the short name from
/// `long_day_name`, so a name that only abbreviates the English one is
/// widened back out.
fn long_day_name(locale: &locale::Time, days_from_sunday: usize) -> String {
    let name = locale.long_day_name(days_from_sunday);

    match LONG_DAY_NAMES.get(days_from_sunday) {
        Some(long) if name.len() < long.len() && long.starts_with(&name[..]) => (*long).to_owned(),
        _                                                                    => name,
    }
}


#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Field<'a> {
    Literal(&'a str),

    Year(NumArguments),
    YearOfCentury(NumArguments),

    MonthName(bool, TextArguments),
    MonthNumber(NumArguments),

    Day(NumArguments),
    WeekdayName(bool, TextArguments),

    Hour(NumArguments),
    Minute(NumArguments),
    Second(NumArguments),
    Fraction(NumArguments),
}

impl<'a> Field<'a> {
    fn format<T>(&self, when: &T, w: &mut String, locale: &locale::Time) where T: DatePiece+TimePiece {
        match *self {
            Field::Literal(s)             => w.push_str(s),
            Field::Year(a)                => a.format(w, when.year()),
            Field::YearOfCentury(a)       => a.format(w, when.year_of_century()),
            Field::MonthName(true, a)     => a.format(w, &locale.long_month_name(when.month().months_from_january())[..]),
            Field::MonthName(false, a)    => a.format(w, &locale.short_month_name(when.month().months_from_january())[..]),
            Field::MonthNumber(a)         => a.format(w, when.month() as i8),
            Field::Day(a)                 => a.format(w, when.day()),
            Field::WeekdayName(true, a)   => a.format(w, &long_day_name(locale, when.weekday() as usize)[..]),
            Field::WeekdayName(false, a)  => a.format(w, &locale.short_day_name(when.weekday() as usize)[..]),
            Field::Hour(a)                => a.format(w, when.hour()),
            Field::Minute(a)              => a.format(w, when.minute()),
            Field::Second(a)              => a.format(w, when.second()),
            Field::Fraction(a)            => a.format_fraction(w, when.nanosecond()),
        }
    }

    fn read(&self, reader: &mut Reader<'_>, locale: &locale::Time) -> Result<(), ReadError> {
        match *self {
            Field::Literal(s)             => reader.literal(s),
            Field::Year(a)                => { reader.components.year = Some(reader.number(a, "year", true)?); Ok(()) },
            Field::YearOfCentury(a)       => {
                let year: i64 = reader.number(a, "year", false)?;
                reader.components.year = Some(if year < 69 { 2000 + year } else { 1900 + year });
                Ok(())
            },
            Field::MonthName(long, a)     => {
                let index = reader.name(a, "month", 12, |i| if long { locale.long_month_name(i) } else { locale.short_month_name(i) })?;
                reader.components.month = Some(index as i8 + 1);
                Ok(())
            },
            Field::MonthNumber(a)         => { reader.components.month = Some(reader.number(a, "month", false)?); Ok(()) },
            Field::Day(a)                 => { reader.components.day = Some(reader.number(a, "day", false)?); Ok(()) },
            Field::WeekdayName(long, a)   => {
                let index = reader.name(a, "weekday", 7, |i| if long { long_day_name(locale, i) } else { locale.short_day_name(i) })?;
                reader.components.weekday = Weekday::from_zero(index as i8).ok();
                Ok(())
            },
            Field::Hour(a)                => { reader.components.hour = Some(reader.number(a, "hour", false)?); Ok(()) },
            Field::Minute(a)              => { reader.components.minute = Some(reader.number(a, "minute", false)?); Ok(()) },
            Field::Second(a)              => { reader.components.second = Some(reader.number(a, "second", false)?); Ok(()) },
            Field::Fraction(a)            => reader.fraction(a),
        }
    }
}


#[derive(PartialEq, Eq, Clone, Debug)]
pub struct DateFormat<'a> {
    pub fields: Vec<Field<'a>>,
}


#[derive(PartialEq, Eq, Clone, Debug, Copy)]
pub enum FormatError {
    InvalidChar { c: char, colon: bool, pos: Pos },
    OpenCurlyBrace { open_pos: Pos },
    CloseCurlyBrace { close_pos: Pos },
    MissingField { open_pos: Pos, close_pos: Pos },
    DoubleAlignment { open_pos: Pos, current_alignment: Alignment },
    DoubleWidth { open_pos: Pos, current_width: Width },
    WidthTooLarge { open_pos: Pos },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            FormatError::InvalidChar { c, colon: true, pos }  => write!(f, "invalid field name {:?} at position {}", c, pos),
            FormatError::InvalidChar { c, colon: false, pos } => write!(f, "invalid character {:?} in field at position {}", c, pos),
            FormatError::OpenCurlyBrace { open_pos }          => write!(f, "unclosed field opened at position {}", open_pos),
            FormatError::CloseCurlyBrace { close_pos }        => write!(f, "unexpected '}}' at position {}", close_pos),
            FormatError::MissingField { open_pos, .. }        => write!(f, "field at position {} has no name", open_pos),
            FormatError::DoubleAlignment { open_pos, .. }     => write!(f, "field at position {} is aligned twice", open_pos),
            FormatError::DoubleWidth { open_pos, .. }         => write!(f, "field at position {} has two widths", open_pos),
            FormatError::WidthTooLarge { open_pos }           => write!(f, "field at position {} is too wide", open_pos),
        }
    }
}

impl ErrorTrait for FormatError {}


/// The ways text can fail to match a layout.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum ReadError {

    /// The layout string itself didn’t compile.
    Format(FormatError),

    /// The text didn’t have the layout’s literal text at this position.
    Literal { expected: String, pos: Pos },

    /// There was no number for a numeric field at this position.
    Number { field: &'static str, pos: Pos },

    /// No month or weekday name matched at this position.
    Name { field: &'static str, pos: Pos },

    /// The text went on after the whole layout was matched.
    Trailing { pos: Pos },
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReadError::Format(e)                => write!(f, "invalid layout: {}", e),
            ReadError::Literal { expected, pos } => write!(f, "expected {:?} at position {}", expected, pos),
            ReadError::Number { field, pos }    => write!(f, "expected a {} number at position {}", field, pos),
            ReadError::Name { field, pos }      => write!(f, "expected a {} name at position {}", field, pos),
            ReadError::Trailing { pos }         => write!(f, "unexpected text at position {}", pos),
        }
    }
}

impl ErrorTrait for ReadError {
    fn source(&self) -> Option<&(dyn ErrorTrait + 'static)> {
        match self {
            ReadError::Format(e) => Some(e),
            _                    => None,
        }
    }
}

impl From<FormatError> for ReadError {
    fn from(error: FormatError) -> Self {
        ReadError::Format(error)
    }
}


pub type Width = usize;
pub type Pos = usize;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Arguments {
    pub alignment: Option<Alignment>,
    pub width:     Option<Width>,
    pub pad_char:  Option<char>,
}

impl Arguments {
    pub fn empty() -> Self {
        Self {
            alignment: None,
            width:     None,
            pad_char:  None,
        }
    }

    pub fn set_width(&mut self, width: Width) -> Self {
        self.width = Some(width);
        *self
    }

    pub fn set_alignment(&mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        *self
    }

    pub fn set_pad_char(&mut self, pad_char: char) -> Self {
        self.pad_char = Some(pad_char);
        *self
    }

    pub fn update_width(&mut self, width: Width, open_pos: Pos) -> Result<(), FormatError> {
        match self.width {
            None => { self.width = Some(width); Ok(())},
            Some(existing) => Err(FormatError::DoubleWidth { open_pos, current_width: existing }),
        }
    }

    pub fn update_alignment(&mut self, alignment: Alignment, open_pos: Pos) -> Result<(), FormatError> {
        match self.alignment {
            None => { self.alignment = Some(alignment); Ok(())},
            Some(existing) => Err(FormatError::DoubleAlignment { open_pos, current_alignment: existing }),
        }
    }

    fn format(self, w: &mut String, string: &str) {
        let width     = self.width.unwrap_or(0);
        let pad_char  = self.pad_char.unwrap_or(' ');
        let alignment = self.alignment.unwrap_or(Alignment::Left);
        w.push_str(&string.pad(width, pad_char, alignment, false));
    }

    /// Strips this field’s padding off a fixed-width slice of text. Zero
    /// padding is left alone, as it reads as part of the number.
    fn unpad(self, text: &str) -> &str {
        match self.pad_char.unwrap_or(' ') {
            c if c.is_ascii_digit() => text,
            c                       => text.trim_matches(c),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.alignment.is_none() && self.width.is_none() && self.pad_char.is_none()
    }
}


#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct TextArguments(Arguments);

impl TextArguments {
    #[cfg(test)]
    fn empty() -> TextArguments {
        TextArguments(Arguments::empty())
    }

    fn format(self, w: &mut String, string: &str) {
        self.0.format(w, string)
    }
}


#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct NumArguments(Arguments);

impl NumArguments {
    #[cfg(test)]
    fn empty() -> NumArguments {
        NumArguments(Arguments::empty())
    }

    fn format<N: PrimInt + fmt::Display>(self, w: &mut String, number: N) {
        self.0.format(w, &number.to_string())
    }

    /// Writes the fraction of a second: exactly `width` digits when a
    /// width is given, and as few as needed otherwise.
    fn format_fraction(self, w: &mut String, nanosecond: i32) {
        let digits = format!("{:09}", nanosecond);

        match self.0.width {
            Some(width) => {
                let mut cut: String = digits.chars().take(width).collect();
                while cut.len() < width { cut.push('0') }
                w.push_str(&cut)
            },
            None => {
                let trimmed = digits.trim_end_matches('0');
                w.push_str(if trimmed.is_empty() { "0" } else { trimmed })
            },
        }
    }
}


/// The values `DateFormat::read` found in some text. A field the layout
/// doesn’t mention stays `None`.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct Components {
    pub year:       Option<i64>,
    pub month:      Option<i8>,
    pub day:        Option<i8>,
    pub weekday:    Option<Weekday>,
    pub hour:       Option<i8>,
    pub minute:     Option<i8>,
    pub second:     Option<i8>,
    pub nanosecond: Option<i32>,
    pub precision:  Option<u8>,
}

impl Components {

    /// Builds a date out of the fields read, with the year defaulting to
    /// 0 and the month and day to 1. The weekday, if read, isn’t checked.
    pub fn to_date(&self) -> Result<LocalDate, Error> {
        LocalDate::from_ymd(self.year.unwrap_or(0), self.month.unwrap_or(1), self.day.unwrap_or(1))
    }

    /// Builds a time out of the fields read, defaulting each to zero.
    pub fn to_time(&self) -> Result<LocalTime, Error> {
        LocalTime::hms_ns(self.hour.unwrap_or(0), self.minute.unwrap_or(0),
                          self.second.unwrap_or(0), self.nanosecond.unwrap_or(0))?
            .with_precision(self.precision.unwrap_or(0))
    }

    pub fn to_date_time(&self) -> Result<LocalDateTime, Error> {
        Ok(LocalDateTime::new(self.to_date()?, self.to_time()?))
    }
}


struct Reader<'t> {
    text: &'t str,
    pos: Pos,
    components: Components,
}

impl<'t> Reader<'t> {
    fn rest(&self) -> &'t str {
        let text = self.text;
        &text[self.pos ..]
    }

    fn literal(&mut self, expected: &str) -> Result<(), ReadError> {
        if self.rest().starts_with(expected) {
            self.pos += expected.len();
            Ok(())
        }
        else {
            Err(ReadError::Literal { expected: expected.to_owned(), pos: self.pos })
        }
    }

    /// Takes `width` characters if there’s a width, or else as many as
    /// `accept` allows.
    fn take<F>(&mut self, width: Option<Width>, accept: F) -> &'t str
    where F: Fn(usize, char) -> bool {
        let rest = self.rest();

        let end = match width {
            Some(width) => rest.char_indices().nth(width).map(|(i, _)| i).unwrap_or_else(|| rest.len()),
            None        => rest.char_indices()
                               .find(|&(i, c)| !accept(i, c))
                               .map(|(i, _)| i)
                               .unwrap_or_else(|| rest.len()),
        };

        self.pos += end;
        &rest[.. end]
    }

    fn number<N: Num>(&mut self, args: NumArguments, field: &'static str, signed: bool) -> Result<N, ReadError> {
        let start = self.pos;
        let taken = self.take(args.0.width, |i, c| c.is_ascii_digit() || (signed && i == 0 && (c == '-' || c == '+')));

        N::from_str_radix(args.0.unpad(taken), 10)
            .map_err(|_| ReadError::Number { field, pos: start })
    }

    /// Matches the longest of `count` names at the current position,
    /// ignoring ASCII case.
    fn name<F>(&mut self, args: TextArguments, field: &'static str, count: usize, name_of: F) -> Result<usize, ReadError>
    where F: Fn(usize) -> String {
        let start = self.pos;
        let candidate = match args.0.width {
            Some(width) => args.0.unpad(self.take(Some(width), |_, _| true)),
            None        => self.rest(),
        };

        let best = (0 .. count)
            .map(|i| (i, name_of(i)))
            .filter(|(_, name)| !name.is_empty())
            .filter(|(_, name)| match candidate.get(.. name.len()) {
                Some(prefix) => prefix.eq_ignore_ascii_case(name),
                None         => false,
            })
            .filter(|(_, name)| args.0.width.is_none() || name.len() == candidate.len())
            .max_by_key(|(_, name)| name.len());

        match best {
            Some((index, name)) => {
                if args.0.width.is_none() {
                    self.pos += name.len();
                }
                Ok(index)
            },
            None => {
                self.pos = start;
                Err(ReadError::Name { field, pos: start })
            },
        }
    }

    fn fraction(&mut self, args: NumArguments) -> Result<(), ReadError> {
        let start = self.pos;
        let digits = self.take(args.0.width, |_, c| c.is_ascii_digit());

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ReadError::Number { field: "fraction", pos: start });
        }

        let kept = &digits[.. digits.len().min(9)];
        let value: i32 = Num::from_str_radix(kept, 10)
            .map_err(|_| ReadError::Number { field: "fraction", pos: start })?;

        self.components.nanosecond = Some(value * 10_i32.pow(9 - kept.len() as u32));
        self.components.precision = Some(kept.len() as u8);
        Ok(())
    }
}


impl<'a> DateFormat<'a> {
    pub fn format<T>(&self, when: &T, locale: &locale::Time) -> String where T: DatePiece+TimePiece {
        let mut buf = String::new();

        for field in &self.fields {
            field.format(when, &mut buf, locale);
        }

        buf
    }

    /// Matches the text against this layout from start to end, returning
    /// the fields it held.
    pub fn read(&self, text: &str, locale: &locale::Time) -> Result<Components, ReadError> {
        let mut reader = Reader { text, pos: 0, components: Components::default() };

        for field in &self.fields {
            field.read(&mut reader, locale)?;
        }

        if reader.pos < text.len() {
            return Err(ReadError::Trailing { pos: reader.pos });
        }

        Ok(reader.components)
    }

    pub fn parse(input: &'a str) -> Result<DateFormat<'a>, FormatError> {
        let mut parser = FormatParser::new(input);
        parser.parse_format_string()?;

        Ok(DateFormat { fields: parser.fields })
    }
}


fn read_with(text: &str, layout: &str) -> Result<Components, Error> {
    let read = DateFormat::parse(layout)
        .map_err(ReadError::from)
        .and_then(|format| format.read(text, &locale::Time::english()));

    read.map_err(|e| {
        debug!("text {:?} does not match layout {:?}: {}", text, layout, e);
        Error::Layout(e)
    })
}

impl LocalDate {

    /// Reads a date out of text written in the given layout, with English
    /// month and weekday names.
    ///
    /// ```
    /// use civiltime::LocalDate;
    ///
    /// let date = LocalDate::from_text("20 Jul 1969", "{:D} {:M} {:Y}").unwrap();
    /// assert_eq!(date, LocalDate::from_ymd(1969, 7, 20).unwrap());
    /// ```
    pub fn from_text(text: &str, layout: &str) -> Result<Self, Error> {
        read_with(text, layout)?.to_date()
    }

    /// Reads a date written as `YYYY-MM-DD`.
    pub fn from_default_text(text: &str) -> Result<Self, Error> {
        Self::from_text(text, DEFAULT_DATE_LAYOUT)
    }
}

impl LocalTime {

    /// Reads a time out of text written in the given layout.
    pub fn from_text(text: &str, layout: &str) -> Result<Self, Error> {
        read_with(text, layout)?.to_time()
    }

    /// Reads a time written as `HH:MM:SS`.
    pub fn from_default_text(text: &str) -> Result<Self, Error> {
        Self::from_text(text, DEFAULT_TIME_LAYOUT)
    }
}

impl LocalDateTime {

    /// Reads a date-time out of text written in the given layout.
    pub fn from_text(text: &str, layout: &str) -> Result<Self, Error> {
        read_with(text, layout)?.to_date_time()
    }

    /// Reads a date-time written as `YYYY-MM-DD HH:MM:SS`.
    pub fn from_default_text(text: &str) -> Result<Self, Error> {
        Self::from_text(text, DEFAULT_DATE_TIME_LAYOUT)
    }
}


struct FormatParser<'a> {
    iter:   CharIndices<'a>,
    fields: Vec<Field<'a>>,
    input:  &'a str,
    anchor: Option<Pos>,
    peekee: Option<Option<(Pos, char)>>,
}

impl<'a> FormatParser<'a> {
    fn new(input: &'a str) -> FormatParser<'a> {
        FormatParser {
            iter:   input.char_indices(),
            fields: Vec::new(),
            input,
            anchor: None,
            peekee: None,
        }
    }

    fn next(&mut self) -> Option<(Pos, char)> {
        match self.peekee {
            Some(p) => {
                self.peekee = None;
                p
            },
            None => { self.iter.next() },
        }
    }

    fn peek(&mut self) -> Option<(Pos, char)> {
        match self.peekee {
            Some(thing) => thing,
            None => {
                self.peekee = Some(self.iter.next());
                self.peek()
            }
        }
    }

    fn collect_up_to_anchor(&mut self, position: Option<Pos>) {
        if let Some(pos) = self.anchor {
            self.anchor = None;
            let text = match position {
                Some(new_pos) => &self.input[pos..new_pos],
                None          => &self.input[pos..],
            };
            self.fields.push(Field::Literal(text));
        }
    }

    fn parse_format_string(&mut self) -> Result<(), FormatError> {
        loop {
            match self.next() {
                Some((new_pos, '{')) => {
                    self.collect_up_to_anchor(Some(new_pos));

                    let field = self.parse_a_thing(new_pos)?;
                    self.fields.push(field);
                },
                Some((new_pos, '}')) => {
                    if let Some((_, '}')) = self.next() {
                        self.collect_up_to_anchor(Some(new_pos));

                        let field = Field::Literal(&self.input[new_pos ..=new_pos]);
                        self.fields.push(field);
                    }
                    else {
                        return Err(FormatError::CloseCurlyBrace { close_pos: new_pos });
                    }
                },
                Some((pos, _)) => {
                    if self.anchor.is_none() {
                        self.anchor = Some(pos);
                    }
                }
                None => break,
            }
        }

        // Any literal characters after the last field still need collecting.
        self.collect_up_to_anchor(None);
        Ok(())
    }

    // Literal fields borrow from the layout string, so `{{` and `}}` can’t
    // be unescaped in place. Instead, the brace gets a one-character
    // Literal of its own, sliced from the layout.

    fn parse_number(&mut self, just_parsed_character: char, open_pos: Pos) -> Result<Width, FormatError> {
        let mut buf = just_parsed_character.to_string();

        while let Some((_, n)) = self.peek() {
            if n.is_ascii_digit() {
                buf.push(n);
                let _ = self.next();
            }
            else {
                break;
            }
        }

        buf.parse().map_err(|_| FormatError::WidthTooLarge { open_pos })
    }

    fn parse_a_thing(&mut self, open_pos: Pos) -> Result<Field<'a>, FormatError> {
        let mut args = Arguments::empty();
        let mut bit = None;
        let close_pos;
        let mut first = true;
        let mut long = false;

        loop {
            match self.next() {
                Some((pos, '{')) if first => return Ok(Field::Literal(&self.input[pos ..=pos])),
                Some((_, '<')) => { args.update_alignment(Alignment::Left, open_pos)?; continue },
                Some((_, '^')) => { args.update_alignment(Alignment::Middle, open_pos)?; continue },
                Some((_, '>')) => { args.update_alignment(Alignment::Right, open_pos)?; continue },
                Some((_, '0')) => { args.pad_char = Some('0'); continue },
                Some((_, n)) if n.is_ascii_digit() => { let width = self.parse_number(n, open_pos)?; args.update_width(width, open_pos)?; continue },
                Some((_, '_')) => { long = true; },
                Some((_, ':')) => {
                    let bitlet = match self.next() {
                        Some((_, 'Y')) => Field::Year(NumArguments(args)),
                        Some((_, 'y')) => Field::YearOfCentury(NumArguments(args)),
                        Some((_, 'M')) => Field::MonthName(long, TextArguments(args)),
                        Some((_, 'n')) => Field::MonthNumber(NumArguments(args)),
                        Some((_, 'D')) => Field::Day(NumArguments(args)),
                        Some((_, 'E')) => Field::WeekdayName(long, TextArguments(args)),
                        Some((_, 'h')) => Field::Hour(NumArguments(args)),
                        Some((_, 'm')) => Field::Minute(NumArguments(args)),
                        Some((_, 's')) => Field::Second(NumArguments(args)),
                        Some((_, 'f')) => Field::Fraction(NumArguments(args)),
                        Some((pos, c)) => return Err(FormatError::InvalidChar { c, colon: true, pos }),
                        None => return Err(FormatError::OpenCurlyBrace { open_pos }),
                    };

                    bit = Some(bitlet);
                },
                Some((pos, '}')) => { close_pos = pos; break; },
                Some((pos, c)) => return Err(FormatError::InvalidChar { c, colon: false, pos }),
                None => return Err(FormatError::OpenCurlyBrace { open_pos }),
            };

            first = false;
        }

        match bit {
            Some(b) => Ok(b),
            None    => Err(FormatError::MissingField { open_pos, close_pos }),
        }
    }
}
