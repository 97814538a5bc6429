use crate::registry::{Fixity, Registry};
use unindent::unindent;

pub const HELP_KEYWORDS: [&str; 2] = ["help", "?"];
pub const QUIT_KEYWORDS: [&str; 2] = ["quit", "exit"];

pub fn version_line() -> String {
    format!("{} version {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

pub fn version() -> String {
    let mut text = version_line();
    text.push('\n');
    text.push_str(&unindent(
        "
        License MIT: <https://opensource.org/licenses/MIT>.
        This is free software: you are free to change and redistribute it.
        There is NO WARRANTY, to the extent permitted by law.
        ",
    ));
    text
}

pub fn short_help() -> &'static str {
    "Type an expression, 'help', or 'quit'."
}

fn name_list<'a, I: IntoIterator<Item = &'a str>>(names: I) -> String {
    let mut out = String::new();
    let mut line = String::from(" ");
    for name in names {
        if line.len() + name.len() + 2 > 72 {
            out.push_str(line.trim_end());
            out.push('\n');
            line = String::from(" ");
        }
        line.push(' ');
        line.push_str(name);
        line.push(',');
    }
    out.push_str(line.trim_end_matches(','));
    out.push('\n');
    out
}

pub fn core_help(registry: &Registry) -> String {
    let mut operators = Vec::new();
    for op in registry.operators().filter(|op| op.fixity == Fixity::Infix) {
        if !operators.contains(&op.symbol) {
            operators.push(op.symbol);
        }
    }
    operators.push("?:");

    let mut text = unindent(
        "
        Evaluates mathematical expression(s) and prints the results.
        Expressions can be given as arguments, read from an input stream, or
        typed interactively.
        Variables can be used without explicit declaration. Separating multiple
        expressions with commas is supported. The variable _ holds the first
        result of the previous evaluation.
        ",
    );
    text.push_str("Available constants:\n");
    text.push_str(&name_list(registry.constants().map(|c| c.name)));
    text.push_str("Available functions:\n");
    text.push_str(&name_list(registry.functions().map(|f| f.name)));
    text.push_str("Available operators:\n");
    text.push_str(&name_list(operators));
    text.push_str(&unindent(
        "
        Expression examples:
          sin(pi/2)
          sin(rad(90))
          a = 2^3 + 2
          b = sqrt(49) * 2 + 6
          sin(2 * pi) + a * b / log10(a^(b/4)) + cos(rad(12*(a+b))) + sign(a)
          x = random(), y = gaussian(), 17 % 5
        ",
    ));
    text
}

pub fn usage(program: &str, registry: &Registry) -> String {
    format!(
        "Usage: {} [<expression...>]\n\n{}",
        program,
        core_help(registry)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lists_every_name() {
        let registry = Registry::standard();
        let help = core_help(&registry);
        for f in registry.functions() {
            assert!(help.contains(f.name), "{}", f.name);
        }
        assert!(help.contains("  pi, e\n"));
        assert!(help.contains("%"));
        assert!(help.starts_with("Evaluates"));
    }

    #[test]
    fn wrapped_lines() {
        let registry = Registry::standard();
        for line in core_help(&registry).lines() {
            assert!(line.len() <= 80, "{}", line);
        }
    }

    #[test]
    fn name_list_format() {
        assert_eq!(name_list(vec!["a", "b", "c"]), "  a, b, c\n");
    }

    #[test]
    fn version_mentions_package() {
        assert!(version().starts_with("mucalc version "));
    }
}
