// SPDX-License-Identifier: LGPL-3.0-or-later OR MPL-2.0
// This file is a part of `shader-builder`.
//
// `shader-builder` is free software: you can redistribute it and/or modify it under the
// terms of either:
//
// * GNU Lesser General Public License as published by the Free Software Foundation, either
//   version 3 of the License, or (at your option) any later version.
// * Mozilla Public License as published by the Mozilla Foundation, version 2.
//
// `shader-builder` is distributed in the hope that it will be useful, but WITHOUT ANY
// WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR
// PURPOSE. See the GNU Lesser General Public License or the Mozilla Public License for more
// details.
//
// You should have received a copy of the GNU Lesser General Public License and the Mozilla
// Public License along with `shader-builder`. If not, see <https://www.gnu.org/licenses/>.

//! Annotating shader source with the errors a compiler reported for it.

use ahash::RandomState;
use hashbrown::HashMap;
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches `ERROR: <source string>:<line>` entries in an info log.
///
/// Line numbers are ASCII digits only.
static ERROR_LOCATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)ERROR:\s*[0-9]+:([0-9]+)").expect("invalid error location regex")
});

/// Split `log` into per-line error fragments, keyed by zero-based line number.
///
/// Each fragment runs from the start of its entry to the start of the next one. If two
/// entries name the same line, the later one wins.
fn errors_by_line(log: &str) -> HashMap<usize, &str, RandomState> {
    let matches = ERROR_LOCATION.captures_iter(log).collect::<Vec<_>>();
    let mut errors = HashMap::with_hasher(RandomState::new());

    for (i, captures) in matches.iter().enumerate() {
        let (Some(entry), Some(line)) = (captures.get(0), captures.get(1)) else {
            continue;
        };

        let end = matches
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(log.len(), |next| next.start());

        // Logs count lines from one; a line zero never refers to the source.
        if let Some(line) = line
            .as_str()
            .parse::<usize>()
            .ok()
            .and_then(|line| line.checked_sub(1))
        {
            errors.insert(line, &log[entry.start()..end]);
        }
    }

    errors
}

/// Number every line of `source` and attach the errors `log` reports for it.
///
/// Each entry has the form `"{n}: {line}"`, where `n` counts from one. Lines with an error
/// get `"\n\n^^^{error}"` appended. There is exactly one entry per line of `source`.
pub fn annotate_source(source: &str, log: &str) -> Vec<String> {
    let errors = errors_by_line(log);

    source
        .split('\n')
        .enumerate()
        .map(|(i, line)| match errors.get(&i) {
            Some(error) => format!("{}: {line}\n\n^^^{error}", i + 1),
            None => format!("{}: {line}", i + 1),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_every_line() {
        let lines = annotate_source("void main() {\n    gl_Position = vec4(0.0);\n}", "");
        assert_eq!(
            lines,
            [
                "1: void main() {",
                "2:     gl_Position = vec4(0.0);",
                "3: }",
            ]
        );
    }

    #[test]
    fn empty_source_has_one_line() {
        assert_eq!(annotate_source("", "ERROR: 0:4: oops"), ["1: "]);
    }

    #[test]
    fn single_error() {
        let lines = annotate_source("a\nb\nc", "ERROR: 0:2: bad thing");
        assert_eq!(lines[0], "1: a");
        assert_eq!(lines[1], "2: b\n\n^^^ERROR: 0:2: bad thing");
        assert_eq!(lines[2], "3: c");
    }

    #[test]
    fn fragments_split_at_next_entry() {
        let log = "ERROR: 0:1: first\nERROR: 0:3: second\n";
        let lines = annotate_source("a\nb\nc", log);

        assert_eq!(lines[0], "1: a\n\n^^^ERROR: 0:1: first\n");
        assert_eq!(lines[1], "2: b");
        assert_eq!(lines[2], "3: c\n\n^^^ERROR: 0:3: second\n");
    }

    #[test]
    fn later_entry_wins() {
        let log = "ERROR: 0:2: one ERROR: 0:2: two";
        let lines = annotate_source("a\nb", log);
        assert_eq!(lines[1], "2: b\n\n^^^ERROR: 0:2: two");
    }

    #[test]
    fn case_insensitive() {
        let lines = annotate_source("a\nb", "error:0:1: lowercase");
        assert_eq!(lines[0], "1: a\n\n^^^error:0:1: lowercase");
    }

    #[test]
    fn out_of_range_lines_are_dropped() {
        let lines = annotate_source("a\nb", "ERROR: 0:0: zero\nERROR: 0:9: nine");
        assert_eq!(lines, ["1: a", "2: b"]);
    }

    #[test]
    fn non_ascii_digits_do_not_split_fragments() {
        let log = "ERROR: 0:1: first \u{0661}ERROR: 0:\u{0663}: arabic";
        let lines = annotate_source("a\nb", log);

        assert_eq!(lines[0], format!("1: a\n\n^^^{log}"));
        assert_eq!(lines[1], "2: b");
    }

    #[test]
    fn warnings_are_ignored() {
        let lines = annotate_source("a", "WARNING: 0:1: unused variable");
        assert_eq!(lines, ["1: a"]);
    }
}
