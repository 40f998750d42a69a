//! `srcset` candidate list parsing.
//!
//! Implements the HTML "parse a srcset attribute" microgrammar the same way
//! the `parse-srcset` package does: candidates with invalid descriptors are
//! dropped, everything else is returned in source order.

/// One image candidate of a `srcset` value.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateListEntry {
    pub url: String,
    /// Pixel density descriptor (`2x`).
    pub density: Option<f64>,
    /// Width descriptor (`640w`).
    pub width: Option<u32>,
    /// Height descriptor (`480h`).
    pub height: Option<u32>,
}

impl CandidateListEntry {
    pub fn has_descriptors(&self) -> bool {
        self.density.is_some() || self.width.is_some() || self.height.is_some()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    InDescriptor,
    InParens,
    AfterDescriptor,
}

/// Parse a `srcset` attribute value into its candidates.
pub fn parse(input: &str) -> Vec<CandidateListEntry> {
    parse_candidates(input).0
}

/// Like [`parse`], but `None` if any candidate had to be dropped.
///
/// Rewriting from a lossy parse would delete author text, so callers that
/// re-serialize the list use this one.
pub fn parse_complete(input: &str) -> Option<Vec<CandidateListEntry>> {
    let (candidates, dropped) = parse_candidates(input);
    (dropped == 0).then_some(candidates)
}

/// Valid candidates in source order, and how many were dropped.
fn parse_candidates(input: &str) -> (Vec<CandidateListEntry>, usize) {
    let chars: Vec<char> = input.chars().collect();
    let mut pos = 0;
    let mut candidates = Vec::new();
    let mut dropped = 0;

    loop {
        while pos < chars.len() && (chars[pos].is_whitespace() || chars[pos] == ',') {
            pos += 1;
        }
        if pos >= chars.len() {
            return (candidates, dropped);
        }

        let start = pos;
        while pos < chars.len() && !chars[pos].is_whitespace() {
            pos += 1;
        }
        let mut url: String = chars[start..pos].iter().collect();
        let mut descriptors = Vec::new();

        if url.ends_with(',') {
            url.truncate(url.trim_end_matches(',').len());
        } else {
            pos = collect_descriptors(&chars, pos, &mut descriptors);
        }

        if let Some(entry) = build_candidate(url, &descriptors) {
            candidates.push(entry);
        } else {
            tracing::trace!(descriptors = ?descriptors, "dropping srcset candidate with invalid descriptors");
            dropped += 1;
        }
    }
}

/// Tokenize descriptors up to the next top-level comma, returning the new position.
fn collect_descriptors(chars: &[char], mut pos: usize, descriptors: &mut Vec<String>) -> usize {
    while pos < chars.len() && chars[pos].is_whitespace() {
        pos += 1;
    }

    let mut current = String::new();
    let mut state = State::InDescriptor;

    loop {
        let Some(&c) = chars.get(pos) else {
            if !current.is_empty() {
                descriptors.push(current);
            }
            return pos;
        };

        match state {
            State::InDescriptor => {
                if c.is_whitespace() {
                    if !current.is_empty() {
                        descriptors.push(std::mem::take(&mut current));
                        state = State::AfterDescriptor;
                    }
                } else if c == ',' {
                    if !current.is_empty() {
                        descriptors.push(current);
                    }
                    return pos + 1;
                } else if c == '(' {
                    current.push(c);
                    state = State::InParens;
                } else {
                    current.push(c);
                }
            }
            State::InParens => {
                current.push(c);
                if c == ')' {
                    state = State::InDescriptor;
                }
            }
            State::AfterDescriptor => {
                if !c.is_whitespace() {
                    state = State::InDescriptor;
                    continue;
                }
            }
        }
        pos += 1;
    }
}

fn build_candidate(url: String, descriptors: &[String]) -> Option<CandidateListEntry> {
    let mut entry = CandidateListEntry { url, density: None, width: None, height: None };

    for descriptor in descriptors {
        let mut chars = descriptor.chars();
        let kind = chars.next_back()?;
        let value = chars.as_str();

        match kind {
            'w' if is_non_negative_integer(value) => {
                if entry.width.is_some() || entry.density.is_some() {
                    return None;
                }
                entry.width = Some(value.parse().ok().filter(|w| *w > 0)?);
            }
            'x' if is_floating_point(value) => {
                if entry.width.is_some() || entry.density.is_some() || entry.height.is_some() {
                    return None;
                }
                let density: f64 = value.parse().ok()?;
                if density < 0.0 {
                    return None;
                }
                entry.density = Some(density);
            }
            'h' if is_non_negative_integer(value) => {
                if entry.height.is_some() || entry.density.is_some() {
                    return None;
                }
                entry.height = Some(value.parse().ok().filter(|h| *h > 0)?);
            }
            _ => return None,
        }
    }

    Some(entry)
}

fn is_non_negative_integer(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// `-?(\d+|\d*\.\d+)([eE][+-]?\d+)?`
fn is_floating_point(value: &str) -> bool {
    let value = value.strip_prefix('-').unwrap_or(value);
    let (mantissa, exponent) = match value.find(['e', 'E']) {
        Some(index) => (&value[..index], Some(&value[index + 1..])),
        None => (value, None),
    };

    let mantissa_ok = match mantissa.split_once('.') {
        Some((int, frac)) => {
            int.bytes().all(|b| b.is_ascii_digit()) && is_non_negative_integer(frac)
        }
        None => is_non_negative_integer(mantissa),
    };

    let exponent_ok = exponent.is_none_or(|exp| {
        let digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
        is_non_negative_integer(digits)
    });

    mantissa_ok && exponent_ok
}
