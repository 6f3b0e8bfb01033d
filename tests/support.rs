use std::ffi::OsStr;
use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::path::Path;
use std::process::{Command, ExitStatus, Output, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

pub const BODY: &[u8] = b"0123456789";

pub struct ServerHandle {
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

/// Spawn a lightweight HTTP server that answers every request with [`BODY`]
/// after `latency`.
///
/// # Errors
///
/// Returns an error if the listener cannot be created or configured.
pub fn spawn_http_server(latency: Duration) -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("set_nonblocking failed: {}", err))?;

    let (shutdown_tx, shutdown_rx) = mpsc::channel();

    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            match listener.accept() {
                Ok((stream, _)) => {
                    thread::spawn(move || handle_client(stream, latency));
                }
                Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(5));
                }
                Err(_) => break,
            }
        }
    });

    Ok((
        format!("http://{}/", addr),
        ServerHandle {
            shutdown: shutdown_tx,
            thread: Some(handle),
        },
    ))
}

/// Like [`spawn_http_server`], but skips in sandboxes that forbid binding sockets.
///
/// # Errors
///
/// Returns an error for any bind failure other than a permission denial.
pub fn spawn_http_server_or_skip(
    latency: Duration,
) -> Result<Option<(String, ServerHandle)>, String> {
    match spawn_http_server(latency) {
        Ok(result) => Ok(Some(result)),
        Err(err) if err.contains("Operation not permitted") => {
            eprintln!("Skipping e2e test: {}", err);
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

/// A URL on a local port nothing listens on.
///
/// # Errors
///
/// Returns an error if no local port can be bound.
pub fn closed_port_url() -> Result<String, String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind closed-port listener failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("closed-port addr failed: {}", err))?;
    drop(listener);
    Ok(format!("http://{}/", addr))
}

fn handle_client(mut stream: TcpStream, latency: Duration) {
    let mut buffer = [0u8; 1024];
    if stream.read(&mut buffer).is_err() {
        return;
    }
    if !latency.is_zero() {
        thread::sleep(latency);
    }
    let head = format!(
        "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        BODY.len()
    );
    if stream.write_all(head.as_bytes()).is_err() || stream.write_all(BODY).is_err() {
        return;
    }
    if stream.flush().is_err() {
        return;
    }
    drop(stream.shutdown(Shutdown::Both));
}

/// Run the `fetchbench` binary from `cwd` and capture output.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed.
pub fn run_fetchbench<I, S>(cwd: &Path, args: I) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    run_fetchbench_with_color(cwd, args, "1")
}

/// Like [`run_fetchbench`], with an explicit `NO_COLOR` value.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed.
pub fn run_fetchbench_with_color<I, S>(cwd: &Path, args: I, no_color: &str) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    fetchbench_command(cwd, args, no_color)?
        .output()
        .map_err(|err| format!("run fetchbench failed: {}", err))
}

/// Runs `fetchbench` with its stdout pipe closed before anything is read.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed or waited on.
pub fn run_fetchbench_closed_stdout<I, S>(cwd: &Path, args: I) -> Result<ExitStatus, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut child = fetchbench_command(cwd, args, "1")?
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|err| format!("spawn fetchbench failed: {}", err))?;
    drop(child.stdout.take());
    child
        .wait()
        .map_err(|err| format!("wait for fetchbench failed: {}", err))
}

fn fetchbench_command<I, S>(cwd: &Path, args: I, no_color: &str) -> Result<Command, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut command = Command::new(fetchbench_bin()?);
    command
        .args(args)
        .current_dir(cwd)
        .env("RUST_LOG", "error")
        .env_remove("FETCHBENCH_LOG")
        .env("NO_COLOR", no_color);
    Ok(command)
}

fn fetchbench_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_fetchbench").map_or_else(
        || Err("CARGO_BIN_EXE_fetchbench missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}
