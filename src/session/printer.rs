use crate::calc::SharedCalc;
use crate::format;
use anyhow::Context;
use std::io::Write;

pub struct Printer<O, E> {
    out: O,
    err: E,
    precision: usize,
}

impl<O: Write, E: Write> Printer<O, E> {
    pub fn new(out: O, err: E, precision: usize) -> Self {
        Self {
            out,
            err,
            precision,
        }
    }

    // Returns whether the line evaluated.
    pub fn report(
        &mut self,
        calc: &SharedCalc,
        line: &str,
        prefix: Option<&str>,
    ) -> anyhow::Result<bool> {
        match calc.with(|c| c.evaluate(line)) {
            Ok(values) => {
                writeln!(self.out, "{}", format::results(&values, self.precision))
                    .context("Failed to write result.")?;
                self.out.flush()?;
                Ok(true)
            }
            Err(diag) => {
                writeln!(self.err, "{}", diag.format(line, prefix))
                    .context("Failed to write diagnostic.")?;
                self.err.flush()?;
                Ok(false)
            }
        }
    }

    pub fn text(&mut self, text: &str) -> anyhow::Result<()> {
        if text.ends_with('\n') {
            write!(self.out, "{}", text)?;
        } else {
            writeln!(self.out, "{}", text)?;
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn error(&mut self, text: &str) -> anyhow::Result<()> {
        writeln!(self.err, "{}", text)?;
        self.err.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::Calculator;
    use crate::registry::Prng;
    use pretty_assertions::assert_eq;

    #[test]
    fn routes_by_outcome() {
        let calc = SharedCalc::new(Calculator::with_rng(Prng::from_seed(3)));
        let mut printer = Printer::new(Vec::new(), Vec::new(), 17);
        assert!(printer.report(&calc, "1+1, 0.5", None).unwrap());
        assert!(!printer.report(&calc, "2*(", Some("Line 9")).unwrap());

        let (out, err) = printer.into_inner();
        assert_eq!(String::from_utf8(out).unwrap(), "2, 0.5\n");
        let err = String::from_utf8(err).unwrap();
        assert!(err.starts_with("Line 9: "), "{}", err);
        assert!(err.ends_with("2*(\n  ^\n"), "{}", err);
    }
}
