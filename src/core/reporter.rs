use std::io::{self, Write};

use super::classifier::Classification;

/// Which partitions to print. Both may be set; neither prints nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputModes {
    pub real: bool,
    pub cdn: bool,
}

/// Input IPs split into CDN and real, each in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    cdn: Vec<String>,
    real: Vec<String>,
}

impl Report {
    pub fn from_classifications(results: &[Classification]) -> Self {
        let (cdn, real): (Vec<&Classification>, Vec<&Classification>) =
            results.iter().partition(|c| c.is_cdn);

        Self {
            cdn: cdn.into_iter().map(|c| c.ip.clone()).collect(),
            real: real.into_iter().map(|c| c.ip.clone()).collect(),
        }
    }

    pub fn cdn(&self) -> &[String] {
        &self.cdn
    }

    pub fn real(&self) -> &[String] {
        &self.real
    }

    /// Lines to emit: real IPs first, then CDN IPs
    pub fn lines(&self, modes: OutputModes) -> Vec<&str> {
        let mut lines = Vec::new();
        if modes.real {
            lines.extend(self.real.iter().map(String::as_str));
        }
        if modes.cdn {
            lines.extend(self.cdn.iter().map(String::as_str));
        }
        lines
    }

    /// Write the selected partitions one IP per line
    pub fn write_to<W: Write>(&self, modes: OutputModes, out: &mut W) -> io::Result<()> {
        for line in self.lines(modes) {
            writeln!(out, "{}", line)?;
        }
        out.flush()
    }
}
