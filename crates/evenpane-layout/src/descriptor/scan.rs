//! Token scanners for the layout descriptor.
//!
//! Each scanner looks at the start of `input` only and returns the value
//! plus the number of bytes it consumed. `position` is the absolute byte
//! offset of `input` within the full descriptor and is used only for error
//! reporting. A scanner never succeeds without consuming input.

use evenpane_common::{Dimensions, LayoutError, Offset};

/// Scan a leading `WIDTHxHEIGHT` token.
pub fn parse_dimensions(input: &str, position: usize) -> Result<(Dimensions, usize), LayoutError> {
    let (width, mut used) = number(input, position, "width")?;
    if !input[used..].starts_with('x') {
        return Err(LayoutError::parse(position + used, "expected 'x' in dimensions"));
    }
    used += 1;
    let (height, n) = number(&input[used..], position + used, "height")?;
    used += n;
    Ok((Dimensions::new(width, height), used))
}

/// Scan a leading `,X,Y` offset token.
pub fn parse_offset(input: &str, position: usize) -> Result<(Offset, usize), LayoutError> {
    let (x, mut used) = comma_number(input, position, "x offset")?;
    let (y, n) = comma_number(&input[used..], position + used, "y offset")?;
    used += n;
    Ok((Offset { x, y }, used))
}

/// Scan a leading `,PANEID` token closing a leaf node.
pub fn parse_pane_token(input: &str, position: usize) -> Result<(u32, usize), LayoutError> {
    comma_number(input, position, "pane number")
}

/// Index of the closer matching the opener at `input[0]`, counting nesting depth.
pub fn find_matching(input: &str, opener: char, closer: char) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in input.char_indices() {
        if c == opener {
            depth += 1;
        } else if c == closer {
            depth = depth.checked_sub(1)?;
        }
        if depth == 0 {
            return Some(i);
        }
    }
    None
}

/// Byte length of leading whitespace.
pub fn whitespace_len(input: &str) -> usize {
    input.len() - input.trim_start().len()
}

fn comma_number(input: &str, position: usize, what: &str) -> Result<(u32, usize), LayoutError> {
    if !input.starts_with(',') {
        return Err(LayoutError::parse(position, format!("expected ',' before {what}")));
    }
    let (value, n) = number(&input[1..], position + 1, what)?;
    Ok((value, n + 1))
}

fn number(input: &str, position: usize, what: &str) -> Result<(u32, usize), LayoutError> {
    let digits = input.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return Err(LayoutError::parse(position, format!("expected {what}")));
    }
    let value = input[..digits]
        .parse()
        .map_err(|_| LayoutError::parse(position, format!("{what} out of range")))?;
    Ok((value, digits))
}
