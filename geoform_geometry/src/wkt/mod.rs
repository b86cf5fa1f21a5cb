//! WKT (Well-Known Text) helpers.
//!
//! A WKT document is a keyword followed by a parenthesized body, e.g.
//! `POLYGON ((4 9.5,2 9.5,4 5.5,4 9.5))`. Groups inside a body are split at the commas
//! of their own nesting level, so whitespace around `),(` does not matter.

use crate::{GeometryTrait, Point};
use geoform_core::{GeoError, GeometryType, Result};
use regex::Regex;
use std::sync::LazyLock;

static RE_GEOMETRY: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?s)^\s*([A-Za-z]+)\s*(\(.*\))\s*$").unwrap());

/// Splits a WKT document into its geometry type and parenthesized body.
pub fn split_keyword(text: &str) -> Result<(GeometryType, &str)> {
	let captures = RE_GEOMETRY
		.captures(text)
		.ok_or_else(|| GeoError::ParseFailure(format!("not a WKT geometry: '{text}'")))?;
	let keyword = captures[1].to_ascii_uppercase();
	let body = captures.get(2).map_or("", |m| m.as_str());
	Ok((GeometryType::from_wkt_keyword(&keyword)?, body))
}

/// Parses a WKT document that must hold a geometry of type `G`.
pub fn parse_geometry<G: GeometryTrait>(text: &str) -> Result<G> {
	log::trace!("decoding WKT {} from {} characters", G::GEOMETRY_TYPE, text.len());
	let (geometry_type, body) = split_keyword(text)?;
	geometry_type.expect(G::GEOMETRY_TYPE)?;
	G::from_wkt_body(body)
}

/// Removes one pair of enclosing parentheses.
pub(crate) fn unwrap_parens(group: &str) -> Result<&str> {
	group
		.trim()
		.strip_prefix('(')
		.and_then(|inner| inner.strip_suffix(')'))
		.ok_or_else(|| GeoError::ParseFailure(format!("expected a parenthesized group, found '{group}'")))
}

/// Splits a comma-separated list at its top nesting level.
///
/// An empty (or all-whitespace) list yields no items.
pub(crate) fn split_top_level(list: &str) -> Result<Vec<&str>> {
	if list.trim().is_empty() {
		return Ok(Vec::new());
	}

	let unbalanced = || GeoError::ParseFailure(format!("unbalanced parentheses in '{list}'"));
	let mut items = Vec::new();
	let mut depth = 0usize;
	let mut start = 0;
	for (index, c) in list.char_indices() {
		match c {
			'(' => depth += 1,
			')' => depth = depth.checked_sub(1).ok_or_else(unbalanced)?,
			',' if depth == 0 => {
				items.push(list[start..index].trim());
				start = index + 1;
			}
			_ => {}
		}
	}
	if depth != 0 {
		return Err(unbalanced());
	}
	items.push(list[start..].trim());
	Ok(items)
}

/// Splits a parenthesized list of parenthesized groups, e.g. the rings of a polygon body.
pub(crate) fn split_groups(body: &str) -> Result<Vec<&str>> {
	split_top_level(unwrap_parens(body)?)
}

/// Parses `"<x> <y>"`.
///
/// Separators or parentheses inside a position are a syntax error, not a dimension error.
pub(crate) fn parse_position(text: &str) -> Result<[f64; 2]> {
	if text.contains([',', '(', ')']) {
		return Err(GeoError::ParseFailure(format!("invalid coordinate '{text}'")));
	}
	let values = text.split_whitespace().collect::<Vec<_>>();
	match values.as_slice() {
		[] => Err(GeoError::ParseFailure("empty coordinate".to_string())),
		[x, y] => Ok([parse_number(x)?, parse_number(y)?]),
		_ => Err(GeoError::InvalidDimension(values.len())),
	}
}

fn parse_number(text: &str) -> Result<f64> {
	text
		.parse::<f64>()
		.map_err(|_| GeoError::ParseFailure(format!("invalid number '{text}'")))
}

/// Parses `"(x y,x y,...)"` into points.
pub(crate) fn parse_points(group: &str) -> Result<Vec<Point>> {
	split_top_level(unwrap_parens(group)?)?
		.into_iter()
		.map(|item| parse_position(item).map(Point::from))
		.collect()
}

/// Formats points as `"(x y,x y,...)"`.
pub(crate) fn format_points<'a>(points: impl Iterator<Item = &'a Point>) -> String {
	let list = points.map(Point::to_text).collect::<Vec<_>>().join(",");
	format!("({list})")
}

/// Joins already parenthesized groups as `"(g1,g2,...)"`.
pub(crate) fn format_groups(groups: impl Iterator<Item = String>) -> String {
	format!("({})", groups.collect::<Vec<_>>().join(","))
}
