// SPDX-License-Identifier: MPL-2.0
//! Plain-text rendering of the math markup attached to records.
//!
//! Records carry TeX-flavoured markup such as `z_{n+1} = z_n^2 + c`. The
//! detail view has no math layout engine, so [`UnicodeFormula`] maps the
//! common commands onto Unicode (Greek letters, operators, sub/superscript
//! digits) and linearises fractions and roots.
//!
//! Rendering never fails. Unknown commands are kept verbatim along with a
//! braced argument, and unbalanced braces are tolerated. Markup nested deeper
//! than [`MAX_DEPTH`] is passed through as plain text from that point on.
//!
//! ```
//! use motion_gallery::formula::{FormulaRenderer, UnicodeFormula};
//!
//! assert_eq!(UnicodeFormula.render(r"z_{n+1} = z_n^2 + c"), "zₙ₊₁ = zₙ² + c");
//! assert_eq!(UnicodeFormula.render(r"\frac{1+\sqrt{5}}{2}"), "(1+√5)/2");
//! ```

/// Deepest group or command nesting that is still rendered.
pub const MAX_DEPTH: usize = 64;

/// Turns math markup into displayable text.
pub trait FormulaRenderer {
    fn render(&self, markup: &str) -> String;
}

/// Unicode approximation of TeX math.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeFormula;

impl FormulaRenderer for UnicodeFormula {
    fn render(&self, markup: &str) -> String {
        let mut parser = Parser {
            chars: markup.chars().collect(),
            pos: 0,
            depth: 0,
        };
        parser.sequence(false)
    }
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    /// Runs one level of nesting, or gives up on rendering past the cap.
    fn nested(&mut self, parse: impl FnOnce(&mut Self) -> String) -> String {
        if self.depth >= MAX_DEPTH {
            let rest = self.chars[self.pos..].iter().collect();
            self.pos = self.chars.len();
            return rest;
        }
        self.depth += 1;
        let out = parse(self);
        self.depth -= 1;
        out
    }

    /// Renders until end of input, or until the closing brace of a group.
    fn sequence(&mut self, in_group: bool) -> String {
        let mut out = String::new();
        while let Some(c) = self.peek() {
            match c {
                '}' => {
                    self.pos += 1;
                    if in_group {
                        return out;
                    }
                    // Stray closing brace at top level.
                }
                '{' => {
                    self.pos += 1;
                    out.push_str(&self.nested(|p| p.sequence(true)));
                }
                '\\' => out.push_str(&self.nested(Self::command)),
                '^' | '_' => {
                    self.pos += 1;
                    let argument = self.argument();
                    out.push_str(&script(&argument, c == '^'));
                }
                _ => {
                    self.pos += 1;
                    out.push(c);
                }
            }
        }
        out
    }

    /// One command argument: a braced group, a command, or a single character.
    fn argument(&mut self) -> String {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
        match self.peek() {
            Some('{') => {
                self.pos += 1;
                self.nested(|p| p.sequence(true))
            }
            Some('\\') => self.nested(Self::command),
            Some(_) => self.bump().map(String::from).unwrap_or_default(),
            None => String::new(),
        }
    }

    fn command(&mut self) -> String {
        // Leading backslash
        self.pos += 1;

        let name: String = if self.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
            let start = self.pos;
            while self.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
                self.pos += 1;
            }
            self.chars[start..self.pos].iter().collect()
        } else {
            match self.bump() {
                Some(c) => c.to_string(),
                None => return "\\".to_string(),
            }
        };

        match name.as_str() {
            "frac" => {
                let numerator = self.argument();
                let denominator = self.argument();
                format!("{}/{}", wrap(&numerator), wrap(&denominator))
            }
            "sqrt" => format!("√{}", wrap(&self.argument())),
            "text" | "mathrm" | "mathbf" | "mathit" | "operatorname" => self.argument(),
            "left" | "right" => String::new(),
            "vec" => accent(&self.argument(), '\u{20D7}'),
            "hat" => accent(&self.argument(), '\u{0302}'),
            "bar" => accent(&self.argument(), '\u{0304}'),
            "dot" => accent(&self.argument(), '\u{0307}'),
            "ddot" => accent(&self.argument(), '\u{0308}'),
            _ => match symbol(&name) {
                Some(text) => text.to_string(),
                None => self.unknown(&name),
            },
        }
    }

    /// Keeps `\name` and an immediately following `{...}` argument as written.
    fn unknown(&mut self, name: &str) -> String {
        let mut out = format!("\\{name}");
        if self.peek() == Some('{') {
            self.pos += 1;
            out.push('{');
            out.push_str(&self.nested(|p| p.sequence(true)));
            out.push('}');
        }
        out
    }
}

/// Parenthesises compound operands of `/` and `√`.
fn wrap(operand: &str) -> String {
    let body = operand.strip_prefix('√').unwrap_or(operand);
    if body.chars().all(char::is_alphanumeric) {
        operand.to_string()
    } else {
        format!("({operand})")
    }
}

fn accent(base: &str, mark: char) -> String {
    let mut out = base.to_string();
    out.push(mark);
    out
}

/// Uses Unicode script characters when every character has one.
fn script(argument: &str, superscript: bool) -> String {
    let mapped: Option<String> = argument
        .chars()
        .map(|c| {
            if superscript {
                superscript_char(c)
            } else {
                subscript_char(c)
            }
        })
        .collect();

    match mapped {
        Some(text) if !text.is_empty() => text,
        _ => {
            let marker = if superscript { '^' } else { '_' };
            if argument.chars().count() <= 1 {
                format!("{marker}{argument}")
            } else {
                format!("{marker}({argument})")
            }
        }
    }
}

fn superscript_char(c: char) -> Option<char> {
    Some(match c {
        '0' => '⁰',
        '1' => '¹',
        '2' => '²',
        '3' => '³',
        '4' => '⁴',
        '5' => '⁵',
        '6' => '⁶',
        '7' => '⁷',
        '8' => '⁸',
        '9' => '⁹',
        '+' => '⁺',
        '-' => '⁻',
        '=' => '⁼',
        '(' => '⁽',
        ')' => '⁾',
        'a' => 'ᵃ',
        'b' => 'ᵇ',
        'c' => 'ᶜ',
        'd' => 'ᵈ',
        'e' => 'ᵉ',
        'f' => 'ᶠ',
        'g' => 'ᵍ',
        'h' => 'ʰ',
        'i' => 'ⁱ',
        'j' => 'ʲ',
        'k' => 'ᵏ',
        'l' => 'ˡ',
        'm' => 'ᵐ',
        'n' => 'ⁿ',
        'o' => 'ᵒ',
        'p' => 'ᵖ',
        'r' => 'ʳ',
        's' => 'ˢ',
        't' => 'ᵗ',
        'u' => 'ᵘ',
        'v' => 'ᵛ',
        'w' => 'ʷ',
        'x' => 'ˣ',
        'y' => 'ʸ',
        'z' => 'ᶻ',
        'T' => 'ᵀ',
        _ => return None,
    })
}

fn subscript_char(c: char) -> Option<char> {
    Some(match c {
        '0' => '₀',
        '1' => '₁',
        '2' => '₂',
        '3' => '₃',
        '4' => '₄',
        '5' => '₅',
        '6' => '₆',
        '7' => '₇',
        '8' => '₈',
        '9' => '₉',
        '+' => '₊',
        '-' => '₋',
        '=' => '₌',
        '(' => '₍',
        ')' => '₎',
        'a' => 'ₐ',
        'e' => 'ₑ',
        'h' => 'ₕ',
        'i' => 'ᵢ',
        'j' => 'ⱼ',
        'k' => 'ₖ',
        'l' => 'ₗ',
        'm' => 'ₘ',
        'n' => 'ₙ',
        'o' => 'ₒ',
        'p' => 'ₚ',
        'r' => 'ᵣ',
        's' => 'ₛ',
        't' => 'ₜ',
        'u' => 'ᵤ',
        'v' => 'ᵥ',
        'x' => 'ₓ',
        'β' => 'ᵦ',
        'γ' => 'ᵧ',
        'ρ' => 'ᵨ',
        'φ' => 'ᵩ',
        'χ' => 'ᵪ',
        _ => return None,
    })
}

fn symbol(name: &str) -> Option<&'static str> {
    Some(match name {
        // Greek, lower case
        "alpha" => "α",
        "beta" => "β",
        "gamma" => "γ",
        "delta" => "δ",
        "epsilon" | "varepsilon" => "ε",
        "zeta" => "ζ",
        "eta" => "η",
        "theta" => "θ",
        "kappa" => "κ",
        "lambda" => "λ",
        "mu" => "μ",
        "nu" => "ν",
        "xi" => "ξ",
        "pi" => "π",
        "rho" => "ρ",
        "sigma" => "σ",
        "tau" => "τ",
        "phi" | "varphi" => "φ",
        "chi" => "χ",
        "psi" => "ψ",
        "omega" => "ω",
        "ell" => "ℓ",
        // Greek, upper case
        "Gamma" => "Γ",
        "Delta" => "Δ",
        "Theta" => "Θ",
        "Lambda" => "Λ",
        "Pi" => "Π",
        "Sigma" => "Σ",
        "Phi" => "Φ",
        "Psi" => "Ψ",
        "Omega" => "Ω",
        // Operators and relations
        "cdot" => "·",
        "times" => "×",
        "pm" => "±",
        "leq" | "le" => "≤",
        "geq" | "ge" => "≥",
        "neq" | "ne" => "≠",
        "approx" => "≈",
        "equiv" => "≡",
        "propto" => "∝",
        "in" => "∈",
        "infty" => "∞",
        "sum" => "∑",
        "prod" => "∏",
        "int" => "∫",
        "nabla" => "∇",
        "partial" => "∂",
        "to" | "rightarrow" => "→",
        "leftarrow" => "←",
        "ldots" | "dots" | "cdots" => "…",
        // Function names
        "sin" => "sin",
        "cos" => "cos",
        "tan" => "tan",
        "log" => "log",
        "ln" => "ln",
        "exp" => "exp",
        "lim" => "lim",
        "max" => "max",
        "min" => "min",
        // Spacing
        "quad" => "  ",
        "qquad" => "    ",
        "," | ";" | ":" | " " => " ",
        "!" => "",
        // Escaped literals
        "{" => "{",
        "}" => "}",
        "|" => "‖",
        "\\" => " ",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(markup: &str) -> String {
        UnicodeFormula.render(markup)
    }

    #[test]
    fn greek_letters_are_mapped() {
        assert_eq!(render(r"\alpha + \beta = \Omega"), "α + β = Ω");
    }

    #[test]
    fn scripts_use_unicode_when_possible() {
        assert_eq!(render("T(n) = O(n^2)"), "T(n) = O(n²)");
        assert_eq!(render("F_n = F_{n-1} + F_{n-2}"), "Fₙ = Fₙ₋₁ + Fₙ₋₂");
        assert_eq!(render("a^{(l)}"), "a⁽ˡ⁾");
    }

    #[test]
    fn unmappable_scripts_fall_back_to_markers() {
        assert_eq!(render(r"x^\infty"), "x^∞");
        assert_eq!(render(r"e^{z/T}"), "e^(z/T)");
    }

    #[test]
    fn text_and_operators() {
        assert_eq!(
            render(r"\text{Branch}(n) = 2 \cdot \text{Branch}(n-1)"),
            "Branch(n) = 2 · Branch(n-1)"
        );
    }

    #[test]
    fn fractions_and_roots_are_linearised() {
        assert_eq!(render(r"\frac{dx}{dt}"), "dx/dt");
        assert_eq!(render(r"\frac{1+\sqrt{5}}{2}"), "(1+√5)/2");
        assert_eq!(
            render(r"\text{softmax}\left(\frac{QK^T}{\sqrt{d_k}}\right)V"),
            "softmax(QKᵀ/√dₖ)V"
        );
    }

    #[test]
    fn unknown_commands_pass_through() {
        assert_eq!(render(r"\mathcal{L} + 1"), r"\mathcal{L} + 1");
        assert_eq!(render(r"\foo"), r"\foo");
        assert_eq!(render(r"\foo x"), r"\foo x");
    }

    #[test]
    fn unknown_command_argument_is_still_rendered() {
        assert_eq!(render(r"\mathbb{R}^n"), r"\mathbb{R}ⁿ");
        assert_eq!(render(r"\mathcal{\alpha}"), r"\mathcal{α}");
    }

    #[test]
    fn moderate_nesting_renders_normally() {
        let markup = format!("{}x{}", "{".repeat(MAX_DEPTH), "}".repeat(MAX_DEPTH));
        assert_eq!(render(&markup), "x");
    }

    #[test]
    fn deep_nesting_is_passed_through() {
        let depth = 200_000;
        let markup = format!("{}x{}", "{".repeat(depth), "}".repeat(depth));
        let rendered = render(&markup);
        assert!(rendered.starts_with('{'));
        assert!(rendered.contains('x'));
        assert!(rendered.len() < markup.len());
    }

    #[test]
    fn deep_command_chains_are_passed_through() {
        let markup = format!("{}x", r"\sqrt".repeat(100_000));
        let rendered = render(&markup);
        assert!(rendered.starts_with('√'));
        assert!(rendered.contains(r"\sqrt"));
        assert!(rendered.contains('x'));
    }

    #[test]
    fn unbalanced_input_never_panics() {
        assert_eq!(render("{x"), "x");
        assert_eq!(render("x}"), "x");
        assert_eq!(render("x^"), "x^");
        assert_eq!(render("\\"), "\\");
        assert_eq!(render(r"\frac{a}"), "a/");
    }

    #[test]
    fn builtin_formulas_render_without_backslashes() {
        let catalog = crate::catalog::Catalog::ai_in_motion();
        for record in catalog.records() {
            if let Some(formula) = &record.formula {
                let rendered = render(formula);
                assert!(
                    !rendered.contains('\\'),
                    "record {} renders as {rendered}",
                    record.id
                );
            }
        }
    }
}
