//! Interactive console input.
//!
//! Integer prompts re-ask until the answer is in range, like the classic
//! wildfire console, but give up after `max_attempts` bad answers or at end
//! of input instead of spinning forever.

use std::io::{BufRead, Write};

use anyhow::{Result, bail};
use er_core::{InputLimits, ResourceCatalog, Units};
use er_incident::{IncidentSpec, Severity};

pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

pub struct Prompter<R, W> {
    input:        R,
    output:       W,
    max_attempts: usize,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output, max_attempts: DEFAULT_MAX_ATTEMPTS }
    }

    pub fn max_attempts(mut self, n: usize) -> Self {
        self.max_attempts = n.max(1);
        self
    }

    /// Read one trimmed line; `None` at end of input.
    fn line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_owned()))
    }

    /// Ask for an integer in `min..=max`.
    pub fn bounded(&mut self, prompt: &str, min: u64, max: u64) -> Result<u64> {
        for _ in 0..self.max_attempts {
            let Some(answer) = self.line(prompt)? else {
                bail!("input ended while waiting for {prompt:?}");
            };
            match answer.parse::<u64>() {
                Ok(v) if (min..=max).contains(&v) => return Ok(v),
                _ => writeln!(
                    self.output,
                    "Invalid input! Please enter a number between {min} and {max}."
                )?,
            }
        }
        bail!("no valid answer to {prompt:?} after {} attempts", self.max_attempts)
    }

    /// Ask for a non-blank word.
    pub fn word(&mut self, prompt: &str) -> Result<String> {
        for _ in 0..self.max_attempts {
            let Some(answer) = self.line(prompt)? else {
                bail!("input ended while waiting for {prompt:?}");
            };
            if !answer.is_empty() {
                return Ok(answer);
            }
            writeln!(self.output, "Invalid input! Please enter a non-empty value.")?;
        }
        bail!("no valid answer to {prompt:?} after {} attempts", self.max_attempts)
    }

    /// Collect a full incident list: count, then per incident location,
    /// severity, required units, and max claim (bounded below by required).
    pub fn incidents(&mut self, catalog: &ResourceCatalog, limits: &InputLimits) -> Result<Vec<IncidentSpec>> {
        let count = self.bounded(
            &format!("Number of incidents (1-{}): ", limits.max_incidents),
            1,
            limits.max_incidents as u64,
        )?;

        let mut specs = Vec::with_capacity(count as usize);
        for i in 0..count {
            writeln!(self.output, "Enter details for Fire ID {i}")?;
            let location = self.word("Location: ")?;
            let severity = self.bounded(
                &format!("Severity ({}-{}): ", limits.min_severity, limits.max_severity),
                limits.min_severity as u64,
                limits.max_severity as u64,
            )? as u8;

            let mut required = Vec::with_capacity(catalog.len());
            for ty in catalog.iter() {
                let units = self.bounded(
                    &format!("Enter required {}: ", ty.name),
                    0,
                    ty.request_cap as u64,
                )?;
                required.push(units as Units);
            }

            let mut max_claim = Vec::with_capacity(catalog.len());
            for (ty, &req) in catalog.iter().zip(&required) {
                let units = self.bounded(
                    &format!("Enter max {} for Fire ID {i}: ", ty.name),
                    req as u64,
                    Units::MAX as u64,
                )?;
                max_claim.push(units as Units);
            }

            specs.push(IncidentSpec { location, severity: Severity(severity), required, max_claim });
        }
        Ok(specs)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use er_core::{PoolConfig, ResourceSpec};

    use super::*;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn bounded_reasks_until_valid() {
        let mut p = prompter("abc\n11\n0\n7\n");
        assert_eq!(p.bounded("Severity (1-10): ", 1, 10).unwrap(), 7);
        let out = String::from_utf8(p.output).unwrap();
        assert_eq!(
            out.matches("Invalid input! Please enter a number between 1 and 10.").count(),
            3
        );
    }

    #[test]
    fn bounded_gives_up_after_max_attempts() {
        let mut p = prompter("x\nx\nx\n5\n").max_attempts(3);
        let err = p.bounded("n: ", 1, 10).unwrap_err();
        assert!(err.to_string().contains("after 3 attempts"));
    }

    #[test]
    fn end_of_input_is_an_error() {
        let mut p = prompter("");
        assert!(p.bounded("n: ", 1, 10).is_err());
        let mut p = prompter("\n");
        assert!(p.word("Location: ").is_err());
    }

    #[test]
    fn collects_incidents_with_claim_floor() {
        let catalog = PoolConfig { resources: vec![ResourceSpec::new("Teams", 15, 15)] }
            .catalog()
            .unwrap();
        // Max claim 3 is below required 4 and is re-asked.
        let mut p = prompter("1\nRidge\n7\n4\n3\n6\n");
        let specs = p.incidents(&catalog, &InputLimits::default()).unwrap();

        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].location, "Ridge");
        assert_eq!(specs[0].severity, Severity(7));
        assert_eq!(specs[0].required, vec![4]);
        assert_eq!(specs[0].max_claim, vec![6]);
        assert!(specs[0].validate(&catalog, &InputLimits::default()).is_ok());
    }
}
