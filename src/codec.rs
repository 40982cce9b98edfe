//! Wire format, in order, with no length prefixes:
//!
//! `title 0x00 | description 0x00 | at 0x00 | instructor 0x00 | location 0x00`
//! `| week (1 byte) | from (int32 LE seconds) | to (int32 LE seconds)`
//!
//! Text fields are UTF-8 and NUL-terminated; absent optionals encode as an
//! empty span. The buffer's own length is the only framing.

use thiserror::Error;
use tracing::debug;

use crate::models::Schedule;
use crate::time::TimeOfDay;

const SEPARATOR: u8 = 0x00;

/// Five separators, one week byte, two 4-byte time fields.
pub const MIN_FRAME_LEN: usize = 14;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("{field} contains a NUL byte, which would corrupt field boundaries")]
    EmbeddedNul { field: &'static str },
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("buffer ended before the {field} terminator")]
    UnterminatedText { field: &'static str },
    #[error("buffer truncated in the {field} field")]
    Truncated { field: &'static str },
}

pub fn encode(schedule: &Schedule) -> Result<Vec<u8>, EncodeError> {
    let text_fields: [(&'static str, &[u8]); 5] = [
        ("title", schedule.title.as_bytes()),
        ("description", optional_bytes(&schedule.description)),
        ("at", optional_bytes(&schedule.at)),
        ("instructor", optional_bytes(&schedule.instructor)),
        ("location", optional_bytes(&schedule.location)),
    ];

    let text_len: usize = text_fields.iter().map(|(_, bytes)| bytes.len() + 1).sum();
    let mut buf = Vec::with_capacity(text_len + MIN_FRAME_LEN - 5);

    for (field, bytes) in text_fields {
        if bytes.contains(&SEPARATOR) {
            return Err(EncodeError::EmbeddedNul { field });
        }
        buf.extend_from_slice(bytes);
        buf.push(SEPARATOR);
    }

    buf.push((schedule.week & 0xff) as u8);
    buf.extend_from_slice(&schedule.from.to_le_bytes());
    buf.extend_from_slice(&schedule.to.to_le_bytes());

    debug!(len = buf.len(), "encoded schedule frame");
    Ok(buf)
}

pub fn decode(data: &[u8]) -> Result<Schedule, FormatError> {
    let mut reader = FrameReader::new(data);

    let title = reader.read_text("title")?;
    let description = reader.read_text("description")?;
    let at = reader.read_text("at")?;
    let instructor = reader.read_text("instructor")?;
    let location = reader.read_text("location")?;

    let week = u16::from(reader.read_byte("week")?);
    let from = TimeOfDay::from_seconds(reader.read_i32("from")?);
    let to = TimeOfDay::from_seconds(reader.read_i32("to")?);

    debug!(len = data.len(), "decoded schedule frame");

    // Empty optional spans mean "absent"; an empty title stays an empty
    // string. Fields not on the wire come back as construction defaults.
    let mut schedule = Schedule::new(title, week, from, to);
    schedule.description = none_if_empty(description);
    schedule.at = none_if_empty(at);
    schedule.instructor = none_if_empty(instructor);
    schedule.location = none_if_empty(location);
    Ok(schedule)
}

struct FrameReader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> FrameReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    fn read_text(&mut self, field: &'static str) -> Result<String, FormatError> {
        let rest = &self.data[self.offset..];
        let end = rest
            .iter()
            .position(|&b| b == SEPARATOR)
            .ok_or(FormatError::UnterminatedText { field })?;
        self.offset += end + 1;
        Ok(String::from_utf8_lossy(&rest[..end]).into_owned())
    }

    fn read_byte(&mut self, field: &'static str) -> Result<u8, FormatError> {
        let byte = self
            .data
            .get(self.offset)
            .copied()
            .ok_or(FormatError::Truncated { field })?;
        self.offset += 1;
        Ok(byte)
    }

    fn read_i32(&mut self, field: &'static str) -> Result<i32, FormatError> {
        let bytes: [u8; 4] = self
            .data
            .get(self.offset..self.offset + 4)
            .and_then(|slice| slice.try_into().ok())
            .ok_or(FormatError::Truncated { field })?;
        self.offset += 4;
        Ok(i32::from_le_bytes(bytes))
    }
}

fn optional_bytes(value: &Option<String>) -> &[u8] {
    value.as_deref().map_or(&[], str::as_bytes)
}

fn none_if_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
