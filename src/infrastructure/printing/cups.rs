//! CUPS print system
//!
//! Drives the CUPS command-line clients:
//! - `lpstat -e` / `lpstat -d` for enumeration and the default destination
//! - `lpoptions -d` to change the default destination
//! - `lp -o raw` fed over stdin for raw device jobs
//! - `lp` on a file path for the generic print verb

use std::io::Write;
use std::path::Path;
use std::process::{Child, Command, Stdio};

use crate::domain::ports::{
    JobOptions, PrintResult, PrintSystem, PrintSystemError, PrintTarget, PrinterHandle,
    PrinterInfo,
};

/// Print system backed by the CUPS client tools on `PATH`
#[derive(Debug, Clone)]
pub struct CupsPrintSystem {
    lp: String,
    lpstat: String,
    lpoptions: String,
}

impl Default for CupsPrintSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl CupsPrintSystem {
    pub fn new() -> Self {
        Self {
            lp: "lp".to_string(),
            lpstat: "lpstat".to_string(),
            lpoptions: "lpoptions".to_string(),
        }
    }

    /// Use explicit client binaries instead of the ones on `PATH`
    pub fn with_commands(
        lp: impl Into<String>,
        lpstat: impl Into<String>,
        lpoptions: impl Into<String>,
    ) -> Self {
        Self {
            lp: lp.into(),
            lpstat: lpstat.into(),
            lpoptions: lpoptions.into(),
        }
    }

    fn command(program: &str) -> Command {
        let mut cmd = Command::new(program);
        // Output is parsed, so keep it in the C locale
        cmd.env("LC_ALL", "C");
        cmd
    }

    fn run(&self, program: &str, args: &[&str]) -> PrintResult<String> {
        let output = Self::command(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| PrintSystemError::Command {
                command: program.to_string(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(PrintSystemError::Command {
                command: format!("{} {}", program, args.join(" ")),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl PrintSystem for CupsPrintSystem {
    fn printers(&self) -> PrintResult<Vec<PrinterInfo>> {
        let listing = self.run(&self.lpstat, &["-e"])?;
        let default = self.default_printer().unwrap_or(None);
        Ok(parse_destinations(&listing)
            .into_iter()
            .map(|name| PrinterInfo {
                is_default: default.as_deref() == Some(name.as_str()),
                name,
            })
            .collect())
    }

    fn default_printer(&self) -> PrintResult<Option<String>> {
        // `lpstat -d` exits non-zero on some versions when no default is set
        match self.run(&self.lpstat, &["-d"]) {
            Ok(out) => Ok(parse_default_destination(&out)),
            Err(PrintSystemError::Command { message, .. })
                if message.contains("no system default") =>
            {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn set_default_printer(&self, name: &str) -> PrintResult<()> {
        self.run(&self.lpoptions, &["-d", name]).map(|_| ())
    }

    fn open_printer<'a>(&'a self, name: &str) -> PrintResult<Box<dyn PrinterHandle + 'a>> {
        if !self.has_printer(name)? {
            return Err(PrintSystemError::PrinterNotFound {
                name: name.to_string(),
            });
        }
        Ok(Box::new(CupsHandle {
            lp: &self.lp,
            printer: name.to_string(),
            child: None,
        }))
    }

    fn print_file(
        &self,
        path: &Path,
        target: PrintTarget<'_>,
        options: &JobOptions,
    ) -> PrintResult<()> {
        let args = verb_args(path, target, options);
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        let out = self.run(&self.lp, &args)?;
        tracing::debug!(output = %out.trim(), "lp accepted job");
        Ok(())
    }

    fn supports_targeted_print(&self) -> bool {
        true
    }
}

/// Arguments for `lp` when printing a file through its type association
fn verb_args(path: &Path, target: PrintTarget<'_>, options: &JobOptions) -> Vec<String> {
    let mut args = Vec::new();
    if let PrintTarget::Named(name) = target {
        args.push("-d".to_string());
        args.push(name.to_string());
    }
    if !options.title.is_empty() {
        args.push("-t".to_string());
        args.push(options.title.clone());
    }
    if let Some(media) = &options.media {
        args.push("-o".to_string());
        args.push(format!("media={media}"));
    }
    args.push("-o".to_string());
    args.push(
        if options.duplex {
            "sides=two-sided-long-edge"
        } else {
            "sides=one-sided"
        }
        .to_string(),
    );
    args.push("--".to_string());
    args.push(path.display().to_string());
    args
}

/// Destination names from `lpstat -e`, one per line
fn parse_destinations(listing: &str) -> Vec<String> {
    listing
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// `system default destination: NAME` → `Some(NAME)`
fn parse_default_destination(output: &str) -> Option<String> {
    output.lines().find_map(|line| {
        line.trim()
            .strip_prefix("system default destination:")
            .map(|rest| rest.trim().to_string())
            .filter(|name| !name.is_empty())
    })
}

/// Open raw queue on one destination; each job is one `lp -o raw` process
struct CupsHandle<'a> {
    lp: &'a str,
    printer: String,
    child: Option<Child>,
}

impl CupsHandle<'_> {
    fn device_error(&self, message: impl Into<String>) -> PrintSystemError {
        PrintSystemError::Device {
            printer: self.printer.clone(),
            message: message.into(),
        }
    }
}

impl PrinterHandle for CupsHandle<'_> {
    fn start_job(&mut self, title: &str) -> PrintResult<()> {
        if self.child.is_some() {
            return Err(self.device_error("a job is already open"));
        }
        let child = CupsPrintSystem::command(self.lp)
            .args(["-d", self.printer.as_str(), "-o", "raw", "-t", title])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.device_error(e.to_string()))?;
        self.child = Some(child);
        Ok(())
    }

    fn write(&mut self, data: &[u8]) -> PrintResult<()> {
        let printer = self.printer.clone();
        let stdin = self
            .child
            .as_mut()
            .and_then(|c| c.stdin.as_mut())
            .ok_or(PrintSystemError::NoOpenJob {
                printer: printer.clone(),
            })?;
        stdin.write_all(data).map_err(|e| PrintSystemError::Device {
            printer,
            message: e.to_string(),
        })
    }

    fn end_job(&mut self) -> PrintResult<()> {
        let mut child = self.child.take().ok_or_else(|| PrintSystemError::NoOpenJob {
            printer: self.printer.clone(),
        })?;
        // Closing stdin tells lp the job data is complete
        drop(child.stdin.take());
        let output = child
            .wait_with_output()
            .map_err(|e| self.device_error(e.to_string()))?;
        if !output.status.success() {
            return Err(self.device_error(String::from_utf8_lossy(&output.stderr).trim()));
        }
        Ok(())
    }
}

impl Drop for CupsHandle<'_> {
    fn drop(&mut self) {
        if let Some(mut child) = self.child.take() {
            // An unfinished job is cancelled rather than submitted
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}
