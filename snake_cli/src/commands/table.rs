use std::io::{self, Write};

use clap::Args;
use racing_snake::snake::{
    render::digit_rows,
    segments::{classes, Frame, Segments},
};
use serde::Serialize;

use super::Run;
use crate::Env;

#[derive(Debug, Args)]
pub struct TableArgs {
    /// Print the table as JSON
    #[arg(long)]
    json: bool,
    /// Group frames sharing a pattern
    #[arg(long)]
    classes: bool,
}

#[derive(Serialize)]
struct FrameRow {
    frame: Frame,
    segments: Segments,
}

#[derive(Serialize)]
struct ClassRow {
    segments: Segments,
    frames: Vec<Frame>,
}

impl TableArgs {
    fn write(&self, out: &mut impl Write) -> anyhow::Result<()> {
        if self.classes {
            let rows = classes()
                .into_iter()
                .map(|(segments, frames)| ClassRow {
                    segments,
                    frames: frames.into_vec(),
                })
                .collect::<Vec<_>>();

            if self.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
            } else {
                for (idx, row) in rows.iter().enumerate() {
                    let frames = row
                        .frames
                        .iter()
                        .map(Frame::to_string)
                        .collect::<Vec<_>>()
                        .join(" ");
                    writeln!(out, "{:>2}  {:<3}  {frames}", idx + 1, row.segments.to_string())?;
                }
            }

            return Ok(());
        }

        let rows = Frame::all()
            .map(|frame| FrameRow {
                frame,
                segments: frame.segments(),
            })
            .collect::<Vec<_>>();

        if self.json {
            writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
        } else {
            for row in rows {
                let [top, mid, bot] = digit_rows(row.segments);
                writeln!(out, "{:>2}  {:<3}  {top}", row.frame.to_string(), row.segments.to_string())?;
                writeln!(out, "         {mid}")?;
                writeln!(out, "         {bot}")?;
            }
        }

        Ok(())
    }
}

impl Run for TableArgs {
    fn run(&self, _env: &Env) -> anyhow::Result<()> {
        self.write(&mut io::stdout().lock())
    }
}

#[cfg(test)]
mod tests {
    use racing_snake::snake::segments::{CLASSES, FRAMES};

    use super::*;

    fn table(json: bool, classes: bool) -> String {
        let mut out = Vec::new();
        TableArgs { json, classes }.write(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn class_listing() {
        let out = table(false, true);
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), CLASSES);
        assert_eq!(lines[0], " 1  ABF  0 8 14 21 28");
        assert!(lines.contains(&" 5  DEF  4 11 17 25 31"), "{out}");
    }

    #[test]
    fn class_json() {
        let rows: Vec<serde_json::Value> = serde_json::from_str(&table(true, true)).unwrap();
        assert_eq!(rows.len(), CLASSES);
        assert_eq!(rows[0]["segments"], serde_json::json!(["A", "B", "F"]));
        assert_eq!(rows[0]["frames"], serde_json::json!([0, 8, 14, 21, 28]));
    }

    #[test]
    fn frame_listing() {
        let out = table(false, false);
        assert_eq!(out.lines().count(), FRAMES * 3);
        assert!(out.starts_with(" 0  ABF   _ \n"), "{out}");
    }
}
