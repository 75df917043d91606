use std::io::{self, Write};


pub fn heartbeat_line(heart_rate: u8) -> String {
    format!("Heartbeat: {} bpm", heart_rate)
}

// Flushed per line so piped readers see each sample as it happens.
pub fn write_heartbeat<W: Write + ?Sized>(out: &mut W, heart_rate: u8) -> io::Result<()> {
    writeln!(out, "{}", heartbeat_line(heart_rate))?;
    out.flush()
}
