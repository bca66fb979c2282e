mod catalog;
mod ipc;
mod schedule;
mod sections;

use std::io::{self, BufRead, Write};

fn main() {
    // Keep this binary dependency-light. Protocol errors go back in-band.
    let mut state = ipc::AppState {
        catalog: None,
        sections: None,
        schedule: schedule::BlockList::new(),
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(v) => v,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let req: ipc::Request = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                // Can't reply with the request id here; report what we can.
                // Serde's message may itself contain quotes, so the envelope
                // goes through the serializer like every other response.
                let resp = serde_json::json!({
                    "ok": false,
                    "error": { "code": "bad_json", "message": e.to_string() },
                });
                let _ = writeln!(stdout, "{}", resp);
                let _ = stdout.flush();
                continue;
            }
        };

        let resp = ipc::handle_request(&mut state, req);
        let _ = writeln!(
            stdout,
            "{}",
            serde_json::to_string(&resp).unwrap_or_else(|_| "{\"ok\":false}".to_string())
        );
        let _ = stdout.flush();
    }
}
