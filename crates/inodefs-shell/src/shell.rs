//! Interactive menu loop.
//!
//! Reads menu numbers and arguments line by line, calls one namespace
//! operation per choice and reports what that operation actually returned.

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use inodefs_kernel::{InodeAttr, NamespaceOps, Permissions};
use tracing::debug;

use crate::config::ShellConfig;
use crate::menu::MenuChoice;

/// Menu driver over any namespace, input and output.
pub struct Shell<N, R, W> {
    ns: N,
    input: R,
    output: W,
    config: ShellConfig,
}

impl<N, R, W> Shell<N, R, W>
where
    N: NamespaceOps,
    R: BufRead,
    W: Write,
{
    pub fn new(ns: N, input: R, output: W, config: ShellConfig) -> Self {
        Self {
            ns,
            input,
            output,
            config,
        }
    }

    /// Hand back the namespace and output sink.
    pub fn into_parts(self) -> (N, W) {
        (self.ns, self.output)
    }

    /// Run until "Exit" is chosen or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.output.write_all(MenuChoice::render().as_bytes())?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                writeln!(self.output)?;
                break;
            };
            match MenuChoice::parse(&line) {
                Ok(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting...")?;
                    break;
                }
                Ok(choice) => {
                    debug!(?choice, "menu selection");
                    self.dispatch(choice)?;
                }
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
        Ok(())
    }

    /// Print `message` and read one line. `None` at end of input.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<()> {
        match choice {
            MenuChoice::Create => self.create(),
            MenuChoice::Write => self.write(),
            MenuChoice::Read => self.read(),
            MenuChoice::Delete => self.delete(),
            MenuChoice::Copy => self.copy(),
            MenuChoice::Rename => self.rename(),
            MenuChoice::ChangePermissions => self.change_permissions(),
            MenuChoice::ShowPermissions => self.show_permissions(),
            MenuChoice::List => self.list(),
            MenuChoice::Info => self.info(),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn create(&mut self) -> io::Result<()> {
        let Some(path) = self.prompt("Enter the filename: ")? else {
            return Ok(());
        };
        let perms = Permissions::new(self.config.default_permissions.clone());
        match self.ns.create(&path, b"", perms) {
            Ok(_) => writeln!(self.output, "File '{path}' created successfully."),
            Err(e) => writeln!(self.output, "Error: {e}"),
        }
    }

    fn write(&mut self) -> io::Result<()> {
        let Some(path) = self.prompt("Enter the filename: ")? else {
            return Ok(());
        };
        let Some(data) = self.prompt("Enter data to write: ")? else {
            return Ok(());
        };
        match self.ns.write(&path, data.as_bytes()) {
            Ok(_) => writeln!(self.output, "File '{path}' written successfully."),
            Err(e) => writeln!(self.output, "Error: {e}"),
        }
    }

    fn read(&mut self) -> io::Result<()> {
        let Some(path) = self.prompt("Enter the filename: ")? else {
            return Ok(());
        };
        match self.ns.read(&path) {
            Ok(data) => {
                writeln!(self.output, "File content:")?;
                writeln!(self.output, "{}", String::from_utf8_lossy(&data))
            }
            Err(e) => writeln!(self.output, "Error: {e}"),
        }
    }

    fn delete(&mut self) -> io::Result<()> {
        let Some(path) = self.prompt("Enter the filename: ")? else {
            return Ok(());
        };
        match self.ns.delete(&path) {
            Ok(()) => writeln!(self.output, "File '{path}' deleted successfully."),
            Err(e) if e.is_not_found() => writeln!(
                self.output,
                "File '{path}' not found. It might have already been deleted."
            ),
            Err(e) => writeln!(self.output, "Error: {e}"),
        }
    }

    fn copy(&mut self) -> io::Result<()> {
        let Some(src) = self.prompt("Enter the source filename: ")? else {
            return Ok(());
        };
        let Some(dest) = self.prompt("Enter the destination filename: ")? else {
            return Ok(());
        };
        match self.ns.copy(&src, &dest) {
            Ok(_) => writeln!(self.output, "File '{src}' copied to '{dest}' successfully."),
            Err(e) => writeln!(self.output, "Error: {e}"),
        }
    }

    fn rename(&mut self) -> io::Result<()> {
        let Some(path) = self.prompt("Enter the filename: ")? else {
            return Ok(());
        };
        let Some(new_name) = self.prompt("Enter the new filename: ")? else {
            return Ok(());
        };
        match self.ns.rename(&path, &new_name) {
            Ok(attr) => writeln!(
                self.output,
                "File '{path}' renamed successfully. New file name: '{}'.",
                attr.name
            ),
            Err(e) => writeln!(self.output, "Error: {e}"),
        }
    }

    fn change_permissions(&mut self) -> io::Result<()> {
        let Some(path) = self.prompt("Enter the filename: ")? else {
            return Ok(());
        };
        let Some(perms) =
            self.prompt("Enter the new permissions (e.g., 'rwx' or 'rw' or 'r'): ")?
        else {
            return Ok(());
        };
        match self.ns.change_permissions(&path, Permissions::new(perms.trim())) {
            Ok(attr) => {
                let shown = self.format_permissions(&attr.permissions);
                writeln!(
                    self.output,
                    "File '{path}' permissions changed to '{shown}' successfully."
                )
            }
            Err(e) => writeln!(self.output, "Error: {e}"),
        }
    }

    fn show_permissions(&mut self) -> io::Result<()> {
        let Some(path) = self.prompt("Enter the filename: ")? else {
            return Ok(());
        };
        match self.ns.show_permissions(&path) {
            Ok(perms) => {
                let shown = self.format_permissions(&perms);
                writeln!(self.output, "File '{path}' permissions: {shown}")
            }
            Err(e) => writeln!(self.output, "Error: {e}"),
        }
    }

    fn list(&mut self) -> io::Result<()> {
        let Some(path) = self.prompt("Enter the directory: ")? else {
            return Ok(());
        };
        let entries = match self.ns.list(&path) {
            Ok(entries) => entries,
            Err(e) => return writeln!(self.output, "Error: {e}"),
        };
        if entries.is_empty() {
            return writeln!(self.output, "(empty)");
        }
        for entry in entries {
            let suffix = if entry.kind.is_dir() { "/" } else { "" };
            writeln!(self.output, "  {}{suffix}", entry.name)?;
        }
        Ok(())
    }

    fn info(&mut self) -> io::Result<()> {
        let Some(path) = self.prompt("Enter the filename: ")? else {
            return Ok(());
        };
        match self.ns.stat(&path) {
            Ok(attr) => self.print_attr(&attr),
            Err(e) => writeln!(self.output, "Error: {e}"),
        }
    }

    fn print_attr(&mut self, attr: &InodeAttr) -> io::Result<()> {
        let perms = self.format_permissions(&attr.permissions);
        writeln!(self.output, "Name:        {}", attr.name)?;
        writeln!(self.output, "Size:        {} bytes", attr.size)?;
        writeln!(self.output, "Permissions: {perms}")?;
        writeln!(self.output, "Created:     {}", epoch_seconds(attr.created_at))?;
        writeln!(self.output, "Updated:     {}", epoch_seconds(attr.updated_at))
    }

    fn format_permissions(&self, perms: &Permissions) -> String {
        if self.config.show_octal {
            format!("{perms} ({:#o})", perms.octal())
        } else {
            perms.to_string()
        }
    }
}

/// Seconds since the Unix epoch, millisecond precision.
fn epoch_seconds(time: SystemTime) -> String {
    match time.duration_since(UNIX_EPOCH) {
        Ok(d) => format!("{}.{:03}", d.as_secs(), d.subsec_millis()),
        Err(_) => "before epoch".to_string(),
    }
}
