//! Value parsers for coordinate-style flags.

use picsq_core::geometry::Viewport;

/// `X,Y` as a pair of signed pixel coordinates.
pub fn point(s: &str) -> Result<(i32, i32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{s}'"))?;
    let x = x.trim().parse().map_err(|_| format!("invalid x in '{s}'"))?;
    let y = y.trim().parse().map_err(|_| format!("invalid y in '{s}'"))?;
    Ok((x, y))
}

/// `WxH` as a viewport size; both edges must be positive.
pub fn viewport(s: &str) -> Result<Viewport, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let width: u32 = w.trim().parse().map_err(|_| format!("invalid width in '{s}'"))?;
    let height: u32 = h.trim().parse().map_err(|_| format!("invalid height in '{s}'"))?;
    if width == 0 || height == 0 {
        return Err(format!("viewport edges must be > 0, got '{s}'"));
    }
    Ok(Viewport::new(width, height))
}

/// `R,G,B` with each channel in 0..=255.
pub fn rgb(s: &str) -> Result<[u8; 3], String> {
    let channels: Vec<u8> = s
        .split(',')
        .map(|c| c.trim().parse::<u8>())
        .collect::<Result<_, _>>()
        .map_err(|_| format!("invalid color '{s}', expected R,G,B in 0-255"))?;
    match channels.as_slice() {
        [r, g, b] => Ok([*r, *g, *b]),
        _ => Err(format!("expected three channels, got '{s}'")),
    }
}
