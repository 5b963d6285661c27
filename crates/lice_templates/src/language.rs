//! Source-header comment styles per language.
//!
//! Languages are keyed by their usual file extension. The table is static
//! and ordered; several extensions share the same comment style.

use serde::Serialize;

/// How rendered text is wrapped when emitted as a source header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CommentStyle {
    /// Every line carries the prefix.
    Line { prefix: &'static str },
    /// The whole text is wrapped once; `line` decorates each inner line
    /// and may be empty.
    Block {
        open: &'static str,
        line: &'static str,
        close: &'static str,
    },
}

impl CommentStyle {
    /// Wrap text in this comment style.
    ///
    /// Trailing newlines of the input are dropped and the output always ends
    /// with exactly one newline. Blank lines never carry trailing whitespace.
    pub fn wrap(&self, text: &str) -> String {
        let text = text.trim_end_matches('\n');
        let mut out = String::with_capacity(text.len() * 2);

        match self {
            CommentStyle::Line { prefix } => {
                if text.is_empty() {
                    out.push_str(prefix);
                    out.push('\n');
                }
                for line in text.lines() {
                    out.push_str(&decorate(prefix, line));
                    out.push('\n');
                }
            }
            CommentStyle::Block { open, line, close } => {
                out.push_str(open);
                out.push('\n');
                for content in text.lines() {
                    out.push_str(&decorate(line, content));
                    out.push('\n');
                }
                out.push_str(close);
                out.push('\n');
            }
        }

        out
    }
}

fn decorate(prefix: &str, line: &str) -> String {
    match (prefix.is_empty(), line.trim().is_empty()) {
        (_, true) => prefix.to_string(),
        (true, false) => line.to_string(),
        (false, false) => format!("{} {}", prefix, line),
    }
}

/// A language header specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageHeaderSpec {
    /// Identifier, the file extension without the dot.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Comment style used in header mode.
    pub style: CommentStyle,
}

const C: CommentStyle = CommentStyle::Block {
    open: "/*",
    line: " *",
    close: " */",
};
const JAVADOC: CommentStyle = CommentStyle::Block {
    open: "/**",
    line: " *",
    close: " */",
};
const HASKELL: CommentStyle = CommentStyle::Block {
    open: "{-",
    line: "",
    close: "-}",
};
const HTML: CommentStyle = CommentStyle::Block {
    open: "<!--",
    line: "",
    close: "-->",
};
const JULIA: CommentStyle = CommentStyle::Block {
    open: "#=",
    line: "",
    close: "=#",
};
const LUA: CommentStyle = CommentStyle::Block {
    open: "--[[",
    line: "",
    close: "--]]",
};
const ML: CommentStyle = CommentStyle::Block {
    open: "(*",
    line: "",
    close: "*)",
};
const PERL: CommentStyle = CommentStyle::Block {
    open: "=item",
    line: "",
    close: "=cut",
};
const POWERSHELL: CommentStyle = CommentStyle::Block {
    open: "<#",
    line: "#",
    close: "#>",
};
const RUBY: CommentStyle = CommentStyle::Block {
    open: "=begin",
    line: "",
    close: "=end",
};
const ERLANG: CommentStyle = CommentStyle::Block {
    open: "%%",
    line: "%",
    close: "%%",
};
const LISP: CommentStyle = CommentStyle::Line { prefix: ";;" };
const UNIX: CommentStyle = CommentStyle::Line { prefix: "#" };
const RUST: CommentStyle = CommentStyle::Line { prefix: "//" };
const FORTRAN: CommentStyle = CommentStyle::Line { prefix: "C" };
const FORTRAN90: CommentStyle = CommentStyle::Line { prefix: "!*" };

const fn lang(id: &'static str, name: &'static str, style: CommentStyle) -> LanguageHeaderSpec {
    LanguageHeaderSpec { id, name, style }
}

/// Built-in languages in declaration order.
pub(crate) const LANGUAGES: &[LanguageHeaderSpec] = &[
    lang("agda", "Agda", HASKELL),
    lang("c", "C", C),
    lang("cc", "C++ (.cc)", C),
    lang("clj", "Clojure", LISP),
    lang("cpp", "C++", C),
    lang("css", "CSS", C),
    lang("el", "Emacs Lisp", LISP),
    lang("erl", "Erlang", ERLANG),
    lang("f", "Fortran", FORTRAN),
    lang("f90", "Fortran 90", FORTRAN90),
    lang("go", "Go", C),
    lang("groovy", "Groovy", C),
    lang("h", "C header", C),
    lang("hpp", "C++ header", C),
    lang("hs", "Haskell", HASKELL),
    lang("html", "HTML", HTML),
    lang("idr", "Idris", HASKELL),
    lang("java", "Java", JAVADOC),
    lang("jl", "Julia", JULIA),
    lang("js", "JavaScript", C),
    lang("kt", "Kotlin", C),
    lang("lisp", "Common Lisp", LISP),
    lang("lua", "Lua", LUA),
    lang("m", "Objective-C", C),
    lang("ml", "OCaml", ML),
    lang("php", "PHP", C),
    lang("pl", "Perl", PERL),
    lang("ps", "PowerShell", POWERSHELL),
    lang("py", "Python", UNIX),
    lang("rb", "Ruby", RUBY),
    lang("rs", "Rust", RUST),
    lang("scala", "Scala", JAVADOC),
    lang("scm", "Scheme", LISP),
    lang("sh", "Shell", UNIX),
    lang("swift", "Swift", C),
    lang("ts", "TypeScript", C),
];
