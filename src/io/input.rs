//! Parsing and synthetic generation of problem-instance files.

use rand::Rng;

use crate::error::{Error, Result};
use crate::point::Point;

/// Parse an input file's full text into `(n, k, wells, houses)`.
///
/// # Errors
///
/// Returns [`Error::InputStructure`] if line 1 does not have exactly two
/// whitespace-separated tokens, if `N` or `K` is not a positive integer,
/// if any coordinate line fails to parse as `x,y`, or if the coordinate
/// line count does not equal `n + n*k`.
pub fn parse_input(text: &str) -> Result<(usize, usize, Vec<Point>, Vec<Point>)> {
    let mut lines = text.lines();
    let header = lines.next().ok_or(Error::InputStructure {
        line: 1,
        reason: "missing header line".to_string(),
    })?;

    let mut tokens = header.split_whitespace();
    let (n, k) = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(n_tok), Some(k_tok), None) => (
            n_tok.parse::<usize>().map_err(|_| Error::InputStructure {
                line: 1,
                reason: format!("N is not a positive integer: {n_tok:?}"),
            })?,
            k_tok.parse::<usize>().map_err(|_| Error::InputStructure {
                line: 1,
                reason: format!("K is not a positive integer: {k_tok:?}"),
            })?,
        ),
        _ => {
            return Err(Error::InputStructure {
                line: 1,
                reason: "expected exactly two whitespace-separated tokens `N K`".to_string(),
            })
        }
    };
    if n == 0 || k == 0 {
        return Err(Error::InputStructure {
            line: 1,
            reason: "N and K must both be at least 1".to_string(),
        });
    }

    let coordinate_lines: Vec<&str> = lines.collect();
    let expected = n + n * k;
    if coordinate_lines.len() != expected {
        return Err(Error::InputStructure {
            line: expected + 2,
            reason: format!(
                "expected {expected} coordinate lines (N + N*K), found {}",
                coordinate_lines.len()
            ),
        });
    }

    let mut points = Vec::with_capacity(expected);
    for (offset, line) in coordinate_lines.iter().enumerate() {
        points.push(parse_point(line, offset + 2)?);
    }
    let houses = points.split_off(n);
    let wells = points;
    Ok((n, k, wells, houses))
}

fn parse_point(line: &str, line_no: usize) -> Result<Point> {
    let (x, y) = line.split_once(',').ok_or_else(|| Error::InputStructure {
        line: line_no,
        reason: format!("expected `x,y`, found {line:?}"),
    })?;
    let x: f64 = x.trim().parse().map_err(|_| Error::InputStructure {
        line: line_no,
        reason: format!("x coordinate is not a number: {x:?}"),
    })?;
    let y: f64 = y.trim().parse().map_err(|_| Error::InputStructure {
        line: line_no,
        reason: format!("y coordinate is not a number: {y:?}"),
    })?;
    Ok(Point::new(x, y))
}

/// Render `(n, k, wells, houses)` into the input file format, as used by
/// the `generate` CLI mode to persist the instance it samples.
#[must_use]
pub fn format_input(n: usize, k: usize, wells: &[Point], houses: &[Point]) -> String {
    let mut out = format!("{n} {k}\n");
    for point in wells.iter().chain(houses.iter()) {
        out.push_str(&format!("{:.2},{:.2}\n", point.x, point.y));
    }
    out
}

/// Sample a random instance: `n` wells and `n * k` houses, coordinates
/// uniform in `[0, 10)` rounded to two decimals, matching the legacy
/// generator's distribution.
///
/// The RNG is injected so output is reproducible: this function never
/// seeds itself from wall-clock time or OS entropy.
pub fn generate_input<R: Rng + ?Sized>(
    n: usize,
    k: usize,
    rng: &mut R,
) -> (Vec<Point>, Vec<Point>) {
    let wells = (0..n).map(|_| random_point(rng)).collect();
    let houses = (0..n * k).map(|_| random_point(rng)).collect();
    (wells, houses)
}

fn random_point<R: Rng + ?Sized>(rng: &mut R) -> Point {
    let round = |v: f64| (v * 100.0).round() / 100.0;
    Point::new(
        round(rng.random_range(0.0..10.0)),
        round(rng.random_range(0.0..10.0)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn parses_well_formed_instance() {
        let text = "1 2\n0.00,0.00\n1.00,0.00\n0.00,1.00\n";
        let (n, k, wells, houses) = parse_input(text).unwrap();
        assert_eq!((n, k), (1, 2));
        assert_eq!(wells, vec![Point::new(0.0, 0.0)]);
        assert_eq!(
            houses,
            vec![Point::new(1.0, 0.0), Point::new(0.0, 1.0)]
        );
    }

    #[test]
    fn rejects_wrong_header_token_count() {
        let err = parse_input("1 2 3\n").unwrap_err();
        assert!(matches!(err, Error::InputStructure { line: 1, .. }));
    }

    #[test]
    fn rejects_missing_coordinate_lines() {
        let err = parse_input("1 2\n0.00,0.00\n").unwrap_err();
        assert!(matches!(err, Error::InputStructure { .. }));
    }

    #[test]
    fn rejects_malformed_coordinate_line() {
        let err = parse_input("1 1\n0.00;0.00\n1.00,1.00\n").unwrap_err();
        assert!(matches!(err, Error::InputStructure { line: 2, .. }));
    }

    #[test]
    fn format_and_parse_round_trip() {
        let mut rng = StdRng::seed_from_u64(42);
        let (wells, houses) = generate_input(3, 2, &mut rng);
        let text = format_input(3, 2, &wells, &houses);
        let (n, k, parsed_wells, parsed_houses) = parse_input(&text).unwrap();
        assert_eq!((n, k), (3, 2));
        assert_eq!(parsed_wells, wells);
        assert_eq!(parsed_houses, houses);
    }

    #[test]
    fn generated_coordinates_are_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let (wells, houses) = generate_input(4, 3, &mut rng);
        for point in wells.iter().chain(houses.iter()) {
            assert!((0.0..10.0).contains(&point.x));
            assert!((0.0..10.0).contains(&point.y));
        }
    }
}
