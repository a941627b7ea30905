use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write as _},
    path::Path,
};

use anyhow::Context;
use chesstama_engine::Board;

use crate::schema::position::PositionFile;

/// Writes a pretty-printed JSON document to `output_path`, or to stdout when it is `None`.
pub fn save_json<T>(value: &T, output_path: Option<&Path>) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    let Some(path) = output_path else {
        let mut stdout = io::stdout().lock();
        return write_json(&mut stdout, value).context("Failed to write JSON to stdout");
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    write_json(&mut BufWriter::new(file), value)
        .with_context(|| format!("Failed to write JSON to {}", path.display()))?;
    eprintln!("Saved to {}", path.display());
    Ok(())
}

fn write_json<W, T>(writer: &mut W, value: &T) -> anyhow::Result<()>
where
    W: io::Write,
    T: serde::Serialize,
{
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

pub fn read_json_file<T>(file_kind: &str, path: &Path) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let file = File::open(path)
        .with_context(|| format!("Failed to open {file_kind} file: {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse {file_kind} JSON file: {}", path.display()))
}

/// Loads a board from a position file, or the opening position when `path` is `None`.
pub fn load_board(path: Option<&Path>) -> anyhow::Result<Board> {
    let Some(path) = path else {
        return Ok(Board::new());
    };
    let file: PositionFile = read_json_file("position", path)?;
    file.to_board()
        .with_context(|| format!("Invalid board in position file: {}", path.display()))
}


#[cfg(test)]
mod tests {
    use chesstama_engine::Player;

    use super::*;

    #[test]
    fn test_saved_position_loads_back() {
        let path = std::env::temp_dir().join(format!("chesstama-util-{}.json", std::process::id()));
        let board = Board::new();
        save_json(&PositionFile::from_board(&board), Some(&path)).unwrap();

        let loaded = load_board(Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, board);
        assert_eq!(loaded.current_player(), Player::P1);
    }

    #[test]
    fn test_missing_file_is_reported() {
        let path = std::env::temp_dir().join("chesstama-util-missing.json");
        let err = read_json_file::<PositionFile>("position", &path).unwrap_err();
        assert!(err.to_string().starts_with("Failed to open position file"));
    }

    #[test]
    fn test_no_position_loads_opening() {
        assert_eq!(load_board(None).unwrap(), Board::new());
    }
}
