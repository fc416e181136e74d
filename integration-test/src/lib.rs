//! Test driver for argdump integration tests.
//!
//! Spawns a binary with piped stdout and stderr, drains both on background
//! threads and hands the captured text back once the child exits.

use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::sync::{Arc, Mutex};
use std::thread;

/// A running child process.
pub struct Session {
    child: Child,
    stdout_capture: Arc<Mutex<Vec<u8>>>,
    stderr_capture: Arc<Mutex<Vec<u8>>>,
    stdout_thread: thread::JoinHandle<()>,
    stderr_thread: thread::JoinHandle<()>,
}

fn drain<R: Read + Send + 'static>(
    mut pipe: R,
    capture: Arc<Mutex<Vec<u8>>>,
    label: &'static str,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut buf = [0u8; 4096];
        loop {
            match pipe.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => capture.lock().unwrap().extend_from_slice(&buf[..n]),
                Err(e) => {
                    eprintln!("{label} drain error: {e}");
                    break;
                }
            }
        }
    })
}

impl Session {
    /// Spawn `binary` with `args` and extra environment variables.
    ///
    /// `RUST_LOG` is cleared unless `env` sets it, so log output does not
    /// leak into captured stderr.
    pub fn spawn(binary: &str, args: &[&str], env: &[(&str, &str)]) -> std::io::Result<Session> {
        let mut cmd = Command::new(binary);
        cmd.args(args)
            .env_remove("RUST_LOG")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        for (k, v) in env {
            cmd.env(k, v);
        }

        let mut child = cmd.spawn()?;
        let stdout_capture = Arc::new(Mutex::new(Vec::new()));
        let stderr_capture = Arc::new(Mutex::new(Vec::new()));
        let stdout_pipe = child
            .stdout
            .take()
            .ok_or_else(|| std::io::Error::other("child stdout not piped"))?;
        let stderr_pipe = child
            .stderr
            .take()
            .ok_or_else(|| std::io::Error::other("child stderr not piped"))?;
        let stdout_thread = drain(stdout_pipe, Arc::clone(&stdout_capture), "stdout");
        let stderr_thread = drain(stderr_pipe, Arc::clone(&stderr_capture), "stderr");

        Ok(Session {
            child,
            stdout_capture,
            stderr_capture,
            stdout_thread,
            stderr_thread,
        })
    }

    /// Wait for the child to exit and assert the exit code.
    pub fn wait_exit(mut self, expected_code: i32) -> SessionOutput {
        let status = self.child.wait().expect("failed to wait for child");
        let code = status.code().unwrap_or(-1);

        let _ = self.stdout_thread.join();
        let _ = self.stderr_thread.join();

        let stdout = String::from_utf8_lossy(&self.stdout_capture.lock().unwrap()).to_string();
        let stderr = String::from_utf8_lossy(&self.stderr_capture.lock().unwrap()).to_string();

        assert_eq!(
            code, expected_code,
            "expected exit code {expected_code}, got {code}\nstdout:\n{stdout}\nstderr:\n{stderr}"
        );

        SessionOutput { stdout, stderr }
    }
}

/// Output captured from a completed session.
pub struct SessionOutput {
    pub stdout: String,
    pub stderr: String,
}

impl SessionOutput {
    /// The line of stdout whose option heading names `long`, if any.
    pub fn value_line(&self, long: &str) -> Option<&str> {
        let needle = format!(" --{long} ");
        self.stdout.lines().find(|l| l.contains(&needle))
    }
}

/// Run `binary` to completion and assert its exit code.
pub fn run(binary: &str, args: &[&str], expected_code: i32) -> SessionOutput {
    Session::spawn(binary, args, &[])
        .expect("failed to spawn binary")
        .wait_exit(expected_code)
}
