//! Typed external command descriptor.
//!
//! Commands are an executable plus an ordered argument list. They are never
//! rendered into a shell line for execution; `Display` exists for logs only.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::process::Command;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: OsString,
    args: Vec<OsString>,
}

impl CommandSpec {
    pub fn new(program: impl AsRef<OsStr>) -> Self {
        Self {
            program: program.as_ref().to_os_string(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    /// Program name as used in error messages.
    pub fn program_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }

    /// Lossy string view of the arguments, handy for assertions and logs.
    pub fn args_lossy(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn args_keep_their_order() {
        let spec = CommandSpec::new("llvm-objcopy")
            .args(["-O", "ihex"])
            .arg(Path::new("firmware.elf"))
            .arg("out dir/firmware.hex");

        assert_eq!(spec.program_name(), "llvm-objcopy");
        assert_eq!(
            spec.args_lossy(),
            vec!["-O", "ihex", "firmware.elf", "out dir/firmware.hex"]
        );
    }

    #[test]
    fn display_joins_program_and_args() {
        let spec = CommandSpec::new("teensy_loader_cli")
            .arg("--mcu=TEENSY40")
            .arg("-wsv")
            .arg("/tmp/x/firmware.hex");
        assert_eq!(
            spec.to_string(),
            "teensy_loader_cli --mcu=TEENSY40 -wsv /tmp/x/firmware.hex"
        );
    }

    #[test]
    fn to_command_carries_program_and_args() {
        let spec = CommandSpec::new("echo").args(["a", "b"]);
        let cmd = spec.to_command();
        assert_eq!(cmd.get_program(), "echo");
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args, vec![OsStr::new("a"), OsStr::new("b")]);
    }
}
