//! Device file access - sysfs writes plus an in-memory recording bus
//!
//! All hardware reachable from this HAL is a set of fixed file paths that
//! accept short textual writes. `ControlBus` abstracts that surface so the
//! handlers can run against real sysfs (`SysfsBus`) or against a recording
//! fake (`MemoryBus`) in tests and `lightsctl --dry-run`.

use std::collections::{HashMap, HashSet};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::warn;

/// Textual access to the LED driver's control files
pub trait ControlBus: Send + Sync {
    /// Write a decimal value plus newline
    fn write_value(&self, path: &str, value: u32) -> io::Result<()>;

    /// Write a literal controller command plus newline
    fn write_command(&self, path: &str, command: &str) -> io::Result<()>;

    /// Read a decimal value (e.g. battery capacity percentage)
    fn read_value(&self, path: &str) -> io::Result<u32>;
}

/// Real sysfs access. Each operation opens the path, writes once and
/// closes; there are no retries. The first open failure is logged, every
/// later one is silent - one flag for the whole process, not per path.
#[derive(Debug, Default)]
pub struct SysfsBus {
    open_warned: AtomicBool,
}

impl SysfsBus {
    pub fn new() -> Self {
        Self::default()
    }

    fn open_rw(&self, path: &str) -> io::Result<File> {
        OpenOptions::new().read(true).write(true).open(path).map_err(|e| {
            if !self.open_warned.swap(true, Ordering::Relaxed) {
                warn!("failed to open {}: {}", path, e);
            }
            e
        })
    }
}

impl ControlBus for SysfsBus {
    fn write_value(&self, path: &str, value: u32) -> io::Result<()> {
        let mut file = self.open_rw(path)?;
        writeln!(file, "{}", value)
    }

    fn write_command(&self, path: &str, command: &str) -> io::Result<()> {
        let mut file = self.open_rw(path)?;
        writeln!(file, "{}", command)
    }

    fn read_value(&self, path: &str) -> io::Result<u32> {
        let text = std::fs::read_to_string(path)?;
        text.trim()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// One recorded bus operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Value { path: String, value: u32 },
    Command { path: String, command: String },
}

impl Op {
    pub fn path(&self) -> &str {
        match self {
            Op::Value { path, .. } | Op::Command { path, .. } => path,
        }
    }
}

#[derive(Debug, Default)]
struct MemoryBusInner {
    ops: Mutex<Vec<Op>>,
    values: Mutex<HashMap<String, u32>>,
    failing: Mutex<HashSet<String>>,
}

/// Recording bus. Clones share the same log, so a caller can keep a handle
/// while the HAL owns the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryBus {
    inner: Arc<MemoryBusInner>,
}

impl MemoryBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every operation against `path` fail with `EACCES`
    pub fn fail_path(&self, path: &str) {
        self.inner.failing.lock().insert(path.to_string());
    }

    /// Seed a value for `read_value` (e.g. the battery capacity file)
    pub fn set_value(&self, path: &str, value: u32) {
        self.inner.values.lock().insert(path.to_string(), value);
    }

    /// Snapshot of all recorded operations, in call order
    pub fn ops(&self) -> Vec<Op> {
        self.inner.ops.lock().clone()
    }

    /// Drain the recorded operations
    pub fn take_ops(&self) -> Vec<Op> {
        std::mem::take(&mut *self.inner.ops.lock())
    }

    fn check(&self, path: &str) -> io::Result<()> {
        if self.inner.failing.lock().contains(path) {
            Err(io::Error::from_raw_os_error(libc::EACCES))
        } else {
            Ok(())
        }
    }
}

impl ControlBus for MemoryBus {
    fn write_value(&self, path: &str, value: u32) -> io::Result<()> {
        self.check(path)?;
        self.inner.values.lock().insert(path.to_string(), value);
        self.inner.ops.lock().push(Op::Value {
            path: path.to_string(),
            value,
        });
        Ok(())
    }

    fn write_command(&self, path: &str, command: &str) -> io::Result<()> {
        self.check(path)?;
        self.inner.ops.lock().push(Op::Command {
            path: path.to_string(),
            command: command.to_string(),
        });
        Ok(())
    }

    fn read_value(&self, path: &str) -> io::Result<u32> {
        self.check(path)?;
        self.inner
            .values
            .lock()
            .get(path)
            .copied()
            .ok_or_else(|| io::Error::from_raw_os_error(libc::ENOENT))
    }
}
