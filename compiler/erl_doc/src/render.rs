//! Width-aware rendering.
//!
//! A single left-to-right scan tracking the current column. Each `Choice`
//! runs a lazy fit test against the remaining width: the preferred branch is
//! measured flat with early exit, so the scan never materializes a rejected
//! branch and total cost stays near-linear in document size.

use crate::doc::Doc;

impl Doc {
    /// Render this document into text under a line-width budget.
    ///
    /// Rendering is total and deterministic: the same document and width
    /// always produce the same text.
    pub fn render(&self, max_width: usize) -> String {
        let mut out = String::new();
        let mut col = 0;
        render_at(self, max_width, 0, false, &mut out, &mut col);
        out
    }
}

/// Render `doc` with its continuation lines anchored at `indent`.
///
/// `indent` is the column at which this document began; `Flush` resets to it.
/// `flat` suppresses breaks and resolves choices to their preferred branch.
fn render_at(
    doc: &Doc,
    max_width: usize,
    indent: usize,
    flat: bool,
    out: &mut String,
    col: &mut usize,
) {
    match doc {
        Doc::Text(s) => {
            out.push_str(s);
            *col += s.chars().count();
        }
        Doc::Spaces(n) => {
            for _ in 0..*n {
                out.push(' ');
            }
            *col += n;
        }
        Doc::Combine(a, b) => {
            render_at(a, max_width, indent, flat, out, col);
            // The right document anchors at the column where it starts.
            let anchor = *col;
            render_at(b, max_width, anchor, flat, out, col);
        }
        Doc::Flush(d) => {
            render_at(d, max_width, indent, flat, out, col);
            if !flat {
                out.push('\n');
                for _ in 0..indent {
                    out.push(' ');
                }
                *col = indent;
            }
        }
        Doc::Choice(preferred, fallback) => {
            if flat {
                render_at(preferred, max_width, indent, true, out, col);
            } else {
                let remaining = max_width as isize - *col as isize;
                if fits(preferred, remaining) {
                    render_at(preferred, max_width, indent, false, out, col);
                } else {
                    render_at(fallback, max_width, indent, false, out, col);
                }
            }
        }
        Doc::SingleLine(d) => {
            render_at(d, max_width, indent, true, out, col);
        }
    }
}

/// Flat-width fit test with early exit.
///
/// Returns true when `doc` can be rendered without a forced break inside
/// `remaining` columns. A `Flush` outside a `SingleLine` wrapper is a forced
/// break and fails immediately; nested choices are measured by their
/// preferred branch.
fn fits(doc: &Doc, mut remaining: isize) -> bool {
    if remaining < 0 {
        return false;
    }
    // (document, inside single_line)
    let mut stack: Vec<(&Doc, bool)> = vec![(doc, false)];
    while let Some((doc, in_single)) = stack.pop() {
        match doc {
            Doc::Text(s) => {
                remaining -= s.chars().count() as isize;
            }
            Doc::Spaces(n) => {
                remaining -= *n as isize;
            }
            Doc::Combine(a, b) => {
                stack.push((b.as_ref(), in_single));
                stack.push((a.as_ref(), in_single));
            }
            Doc::Flush(d) => {
                if !in_single {
                    return false;
                }
                stack.push((d.as_ref(), in_single));
            }
            Doc::Choice(preferred, _) => {
                stack.push((preferred.as_ref(), in_single));
            }
            Doc::SingleLine(d) => {
                stack.push((d.as_ref(), true));
            }
        }
        if remaining < 0 {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn text_renders_verbatim() {
        assert_eq!(Doc::text("hello").render(80), "hello");
    }

    #[test]
    fn combine_continues_on_same_line() {
        let doc = Doc::text("foo").combine(Doc::text("bar"));
        assert_eq!(doc.render(80), "foobar");
    }

    #[test]
    fn flush_resets_to_start_column() {
        // The inner block begins at column 2, so its break realigns there.
        let inner = Doc::text("cd").flush().combine(Doc::text("ef"));
        let doc = Doc::text("ab").combine(inner);
        assert_eq!(doc.render(80), "abcd\n  ef");
    }

    #[test]
    fn flush_at_origin_resets_to_zero() {
        let doc = Doc::text("a").flush().combine(Doc::text("b"));
        assert_eq!(doc.render(80), "a\nb");
    }

    #[test]
    fn spaces_anchor_following_content() {
        let body = Doc::text("x").flush().combine(Doc::text("y"));
        let doc = Doc::text("[")
            .flush()
            .combine(Doc::spaces(4).combine(body).flush())
            .combine(Doc::text("]"));
        assert_eq!(doc.render(80), "[\n    x\n    y\n]");
    }

    #[test]
    fn choice_prefers_flat_when_it_fits() {
        let flat = Doc::text("a, b, c").single_line();
        let broken = Doc::text("a,").flush().combine(Doc::text("b"));
        assert_eq!(Doc::choice(flat.clone(), broken.clone()).render(80), "a, b, c");
        assert_eq!(Doc::choice(flat, broken).render(5), "a,\nb");
    }

    #[test]
    fn choice_rejects_branch_with_forced_break() {
        let preferred = Doc::text("a").flush().combine(Doc::text("b"));
        let fallback = Doc::text("fallback");
        assert_eq!(Doc::choice(preferred, fallback).render(80), "fallback");
    }

    #[test]
    fn single_line_ignores_breaks_and_choices() {
        let doc = Doc::text("a")
            .flush()
            .combine(Doc::choice(Doc::text("b"), Doc::text("never")))
            .single_line();
        assert_eq!(doc.render(1), "ab");
    }

    #[test]
    fn reduce_folds_pairwise() {
        let doc = Doc::reduce(
            |a, b| a.combine(Doc::text(", ")).combine(b),
            vec![Doc::text("1"), Doc::text("2"), Doc::text("3")],
        );
        assert_eq!(doc.render(80), "1, 2, 3");
        assert_eq!(Doc::reduce(|a, b| a.combine(b), vec![]).render(80), "");
    }

    #[test]
    fn nested_choices_resolve_independently() {
        let inner = Doc::choice(
            Doc::text("{1, 2}").single_line(),
            Doc::text("{")
                .flush()
                .combine(Doc::spaces(4).combine(Doc::text("1,").flush().combine(Doc::text("2"))).flush())
                .combine(Doc::text("}")),
        );
        let outer = Doc::text("x = ").combine(inner);
        assert_eq!(outer.render(80), "x = {1, 2}");
        assert_eq!(outer.render(8), "x = {\n        1,\n        2\n    }");
    }
}
