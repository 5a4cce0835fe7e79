//! Alternative compression scheme for ASCII hex graphic fields
//!
//! Within a row, a run of the same hex digit can be written as a repeat count followed by the digit. Counts are letters, `G` to `Y` standing for 1 to 19 and `g` to `z` for 20 to 400 in steps of 20, summed when combined (`hI` is 43). A `,` fills the rest of the row with `0`, a `!` fills it with `F`, and a `:` alone repeats the previous row.

use crate::Error;

const REPEAT_ROW: char = ':';
const FILL_ZEROS: char = ',';
const FILL_ONES: char = '!';

/// Largest count a single letter pair can express
const MAX_COUNT: usize = 400;

/// Appends the compressed form of one row of hex digits
///
/// `previous` is the uncompressed hex text of the row above, if any.
pub(crate) fn compress_row(row: &[u8], previous: Option<&[u8]>, target: &mut String) {
    if previous == Some(row) {
        target.push(REPEAT_ROW);
        return;
    }

    let mut idx = 0;
    while idx < row.len() {
        let digit = row[idx];
        let mut end = idx + 1;
        while end < row.len() && row[end] == digit {
            end += 1;
        }

        if end == row.len() && digit == b'0' {
            target.push(FILL_ZEROS);
        } else if end == row.len() && digit == b'F' {
            target.push(FILL_ONES);
        } else {
            push_run(digit as char, end - idx, target);
        }
        idx = end;
    }
}

fn push_run(digit: char, mut length: usize, target: &mut String) {
    while length > MAX_COUNT {
        target.push('z');
        target.push(digit);
        length -= MAX_COUNT;
    }
    if length < 3 {
        // A count would take as much room as the digits themselves
        for _ in 0..length {
            target.push(digit);
        }
        return;
    }
    if length >= 20 {
        target.push((b'g' + (length / 20 - 1) as u8) as char);
    }
    if length % 20 > 0 {
        target.push((b'G' + (length % 20 - 1) as u8) as char);
    }
    target.push(digit);
}

/// Expands a compressed payload back into packed row bytes
///
/// ```rust
/// # use zpl_rs::raster::decompress;
/// // Two rows of two bytes: a run of three F followed by a 0, then a repeat
/// assert_eq!(vec![0xFF, 0xF0, 0xFF, 0xF0], decompress("IF0\n:", 2, 2).unwrap());
/// ```
///
/// Line breaks between rows are tolerated.
pub fn decompress(data: &str, bytes_per_row: usize, rows: usize) -> Result<Vec<u8>, Error> {
    let row_len = bytes_per_row * 2;
    let mut expanded: Vec<Vec<u8>> = Vec::with_capacity(rows);
    let mut row: Vec<u8> = Vec::with_capacity(row_len);
    let mut count = 0usize;

    for (position, c) in data.chars().enumerate() {
        match c {
            'G'..='Y' => count += (c as usize) - ('G' as usize) + 1,
            'g'..='z' => count += ((c as usize) - ('g' as usize) + 1) * 20,
            '0'..='9' | 'A'..='F' | 'a'..='f' => {
                let repeat = count.max(1);
                count = 0;
                if row.len() + repeat > row_len {
                    return Err(Error::MalformedGraphicField(format!("row {} overflows at character {}", expanded.len(), position)));
                }
                let digit = c.to_ascii_uppercase() as u8;
                row.extend(std::iter::repeat(digit).take(repeat));
            },
            FILL_ZEROS | FILL_ONES => {
                if count != 0 {
                    return Err(Error::MalformedGraphicField(format!("repeat count before fill at character {}", position)));
                }
                let digit = if c == FILL_ZEROS { b'0' } else { b'F' };
                row.resize(row_len, digit);
            },
            REPEAT_ROW => {
                if count != 0 || !row.is_empty() {
                    return Err(Error::MalformedGraphicField(format!("row repeat inside a row at character {}", position)));
                }
                match expanded.last() {
                    Some(previous) => row = previous.clone(),
                    None => return Err(Error::MalformedGraphicField("first row can not be a repeat".to_string()))
                }
            },
            '\n' | '\r' => continue,
            other => return Err(Error::MalformedGraphicField(format!("unexpected character {:?} at {}", other, position)))
        }

        if row.len() == row_len {
            if expanded.len() == rows {
                return Err(Error::MalformedGraphicField(format!("more than {} rows", rows)));
            }
            expanded.push(std::mem::replace(&mut row, Vec::with_capacity(row_len)));
        }
    }

    if count != 0 || !row.is_empty() {
        return Err(Error::MalformedGraphicField("truncated last row".to_string()));
    }
    if expanded.len() != rows {
        return Err(Error::MalformedGraphicField(format!("expected {} rows, found {}", rows, expanded.len())));
    }

    let mut bytes = Vec::with_capacity(bytes_per_row * rows);
    for hex_row in &expanded {
        for pair in hex_row.chunks(2) {
            bytes.push((hex_value(pair[0]) << 4) | hex_value(pair[1]));
        }
    }
    Ok(bytes)
}

// Only called on digits already checked to be uppercase hex
fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        _ => digit - b'A' + 10
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compress(rows: &[&str]) -> String {
        let mut target = String::new();
        let mut previous: Option<&[u8]> = None;
        for row in rows {
            compress_row(row.as_bytes(), previous, &mut target);
            previous = Some(row.as_bytes());
        }
        target
    }

    #[test]
    fn trailing_fills() {
        assert_eq!(",", compress(&["0000"]));
        assert_eq!("!", compress(&["FFFF"]));
        assert_eq!("A,", compress(&["A000"]));
        assert_eq!("0!", compress(&["0FFF"]));
    }

    #[test]
    fn repeated_rows() {
        assert_eq!("81,::", compress(&["8100", "8100", "8100"]));
        assert_eq!("81,18,:", compress(&["8100", "1800", "1800"]));
    }

    #[test]
    fn counts() {
        assert_eq!("AA,", compress(&["AA0"]));
        assert_eq!("IA,", compress(&["AAA0"]));
        // 43 digits are h (40) and I (3)
        let row = format!("{}0", "7".repeat(43));
        assert_eq!("hI7,", compress(&[row.as_str()]));
        let row = format!("{}0", "7".repeat(20));
        assert_eq!("g7,", compress(&[row.as_str()]));
        let row = format!("{}0", "7".repeat(802));
        assert_eq!("z7z777,", compress(&[row.as_str()]));
    }

    #[test]
    fn decompress_counts() {
        let expanded = decompress("hI7,", 22, 1).unwrap();
        let mut expected = vec![0x77; 21];
        expected.push(0x70);
        assert_eq!(expected, expanded);
    }

    #[test]
    fn decompress_rejects() {
        assert!(decompress(":", 1, 1).is_err());
        assert!(decompress("000", 1, 1).is_err());
        assert!(decompress("0", 1, 1).is_err());
        assert!(decompress(",", 1, 2).is_err());
        assert!(decompress(",,", 1, 1).is_err());
        assert!(decompress("G,", 1, 1).is_err());
        assert!(decompress("0:", 1, 2).is_err());
        assert!(decompress("X0", 1, 1).is_err());
        assert!(decompress("0#", 1, 1).is_err());
    }

    #[test]
    fn decompress_round_trips_compress() {
        let rows = ["00FF00FF", "00FF00FF", "FFFFFFFF", "0000000F", "12345678", "00000000"];
        let joined: String = rows.concat();
        let compressed = compress(&rows);
        let bytes = decompress(&compressed, 4, rows.len()).unwrap();
        let hex: String = bytes.iter().map(|b| format!("{:02X}", b)).collect();
        assert_eq!(joined, hex);
    }
}
