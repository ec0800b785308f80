//! Maps terminal input lines onto dashboard intents.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use payables_core::{Msg, RawFileDescriptor, SortKey, StagedFileView};
use thiserror::Error;

pub const HELP: &str = "\
check <id> | uncheck <id>     tick or untick an invoice
all | none | reset            select every invoice / deselect / cancel selection
search [text]                 filter invoices (empty clears)
pay                           hand off the selected invoices for payment
drag | leave                  simulate a drag entering / leaving the drop zone
drop <path>...                drop files onto the staging area (quote paths with spaces)
browse <path>...              pick files through the browser
remove <n|id>                 unstage a file by row number or id
clear-staged                  empty the staging area
process                       hand off the staged files
hsearch [text]                filter upload history (empty clears)
sort <uploaded|name|size>     sort history; repeat to flip direction
clear-history                 empty upload history
help | quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageVia {
    Drop,
    Browse,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    Stage { via: StageVia, paths: Vec<PathBuf> },
    /// Row number from the last render, or a generated id.
    RemoveStaged(String),
    Help,
    Quit,
    Empty,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),
    #[error("`{command}` needs {argument}")]
    MissingArgument {
        command: String,
        argument: &'static str,
    },
    #[error("unknown sort key `{0}` (uploaded, name, size)")]
    InvalidSortKey(String),
    #[error("unterminated quote in `{0}`")]
    UnterminatedQuote(String),
}

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map(|(w, r)| (w, r.trim()))
        .unwrap_or((line, ""));

    let command = match word {
        "" => Command::Empty,
        "check" | "uncheck" => {
            let id = required(rest, word, "an invoice id")?;
            Command::Dispatch(Msg::InvoiceToggled {
                id: id.to_string(),
                checked: word == "check",
            })
        }
        "all" => Command::Dispatch(Msg::SelectAllClicked(true)),
        "none" => Command::Dispatch(Msg::SelectAllClicked(false)),
        "reset" => Command::Dispatch(Msg::SelectionReset),
        "search" => Command::Dispatch(Msg::InvoiceQueryChanged(rest.to_string())),
        "pay" => Command::Dispatch(Msg::PaySelectedClicked),
        "drag" => Command::Dispatch(Msg::DragEntered),
        "leave" => Command::Dispatch(Msg::DragLeft),
        "drop" | "browse" => {
            required(rest, word, "at least one path")?;
            let paths = split_paths(rest)?;
            let via = if word == "drop" {
                StageVia::Drop
            } else {
                StageVia::Browse
            };
            Command::Stage {
                via,
                paths,
            }
        }
        "remove" => {
            let target = required(rest, "remove", "a row number or id")?;
            Command::RemoveStaged(target.to_string())
        }
        "clear-staged" => Command::Dispatch(Msg::StagingCleared),
        "process" => Command::Dispatch(Msg::ProcessClicked),
        "hsearch" => Command::Dispatch(Msg::HistoryQueryChanged(rest.to_string())),
        "sort" => {
            let key = required(rest, "sort", "a key")?;
            Command::Dispatch(Msg::HistorySortClicked(parse_sort_key(key)?))
        }
        "clear-history" => Command::Dispatch(Msg::HistoryCleared),
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(command)
}

fn required<'a>(
    rest: &'a str,
    command: &str,
    argument: &'static str,
) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument {
            command: command.to_string(),
            argument,
        })
    } else {
        Ok(rest)
    }
}

fn parse_sort_key(raw: &str) -> Result<SortKey, CommandError> {
    match raw.to_ascii_lowercase().as_str() {
        "uploaded" | "date" | "uploadedat" => Ok(SortKey::UploadedAt),
        "name" => Ok(SortKey::Name),
        "size" => Ok(SortKey::Size),
        _ => Err(CommandError::InvalidSortKey(raw.to_string())),
    }
}

/// Splits on whitespace, treating a double-quoted run as one path.
fn split_paths(rest: &str) -> Result<Vec<PathBuf>, CommandError> {
    let mut paths = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut pending = false;
    for ch in rest.chars() {
        match ch {
            '"' => {
                quoted = !quoted;
                pending = true;
            }
            ch if ch.is_whitespace() && !quoted => {
                if pending {
                    paths.push(PathBuf::from(std::mem::take(&mut current)));
                    pending = false;
                }
            }
            ch => {
                current.push(ch);
                pending = true;
            }
        }
    }
    if quoted {
        return Err(CommandError::UnterminatedQuote(rest.to_string()));
    }
    if pending {
        paths.push(PathBuf::from(current));
    }
    Ok(paths)
}

/// Resolves a `remove` target against the rows of the last render.
///
/// A number is only ever a 1-based row; anything else must be a unique
/// prefix of a generated id.
pub fn resolve_staged_target(staged: &[StagedFileView], target: &str) -> Option<String> {
    if let Ok(number) = target.parse::<usize>() {
        return number
            .checked_sub(1)
            .and_then(|index| staged.get(index))
            .map(|file| file.id.clone());
    }
    let mut matches = staged.iter().filter(|file| file.id.starts_with(target));
    match (matches.next(), matches.next()) {
        (Some(file), None) => Some(file.id.clone()),
        _ => None,
    }
}

/// Builds a raw descriptor from file metadata only; contents are never read.
pub fn describe_path(path: &Path) -> io::Result<RawFileDescriptor> {
    let meta = fs::metadata(path)?;
    if !meta.is_file() {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"));
    }
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"))?;
    let mut raw = RawFileDescriptor::new(name, meta.len());
    raw.last_modified_at = meta.modified().ok().map(DateTime::<Utc>::from);
    Ok(raw)
}

/// Turns a staging command into the matching message.
pub fn stage_msg(
    via: StageVia,
    files: Vec<RawFileDescriptor>,
    received_at: DateTime<Utc>,
) -> Msg {
    match via {
        StageVia::Drop => Msg::FilesDropped { files, received_at },
        StageVia::Browse => Msg::FilesBrowsed { files, received_at },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn check_and_uncheck_map_to_toggle() {
        assert_eq!(
            parse_command("check INV-2025-001"),
            Ok(Command::Dispatch(Msg::InvoiceToggled {
                id: "INV-2025-001".to_string(),
                checked: true,
            }))
        );
        assert_eq!(
            parse_command("  uncheck   INV-2025-001 "),
            Ok(Command::Dispatch(Msg::InvoiceToggled {
                id: "INV-2025-001".to_string(),
                checked: false,
            }))
        );
    }

    #[test]
    fn search_without_text_clears_query() {
        assert_eq!(
            parse_command("search"),
            Ok(Command::Dispatch(Msg::InvoiceQueryChanged(String::new())))
        );
        assert_eq!(
            parse_command("hsearch fattura 2025"),
            Ok(Command::Dispatch(Msg::HistoryQueryChanged("fattura 2025".to_string())))
        );
    }

    #[test]
    fn sort_keys_are_case_insensitive() {
        assert_eq!(
            parse_command("sort NAME"),
            Ok(Command::Dispatch(Msg::HistorySortClicked(SortKey::Name)))
        );
        assert_eq!(
            parse_command("sort weight"),
            Err(CommandError::InvalidSortKey("weight".to_string()))
        );
    }

    #[test]
    fn missing_arguments_are_reported() {
        assert_eq!(
            parse_command("drop"),
            Err(CommandError::MissingArgument {
                command: "drop".to_string(),
                argument: "at least one path",
            })
        );
        assert!(matches!(
            parse_command("remove"),
            Err(CommandError::MissingArgument { ref command, .. }) if command == "remove"
        ));
    }

    #[test]
    fn drop_collects_every_path() {
        assert_eq!(
            parse_command("drop a.pdf b.csv"),
            Ok(Command::Stage {
                via: StageVia::Drop,
                paths: vec![PathBuf::from("a.pdf"), PathBuf::from("b.csv")],
            })
        );
    }

    #[test]
    fn quoted_paths_keep_their_spaces() {
        assert_eq!(
            parse_command(r#"drop "fattura marzo.pdf" aws.csv"#),
            Ok(Command::Stage {
                via: StageVia::Drop,
                paths: vec![PathBuf::from("fattura marzo.pdf"), PathBuf::from("aws.csv")],
            })
        );
        assert_eq!(
            parse_command(r#"browse "/tmp/bollette 2025/enel.pdf""#),
            Ok(Command::Stage {
                via: StageVia::Browse,
                paths: vec![PathBuf::from("/tmp/bollette 2025/enel.pdf")],
            })
        );
        assert_eq!(
            parse_command(r#"drop "fattura marzo.pdf"#),
            Err(CommandError::UnterminatedQuote(r#""fattura marzo.pdf"#.to_string()))
        );
    }

    fn staged_row(id: &str) -> StagedFileView {
        StagedFileView {
            id: id.to_string(),
            name: format!("{id}.pdf"),
            size: 1,
            file_type: "pdf".to_string(),
            last_modified_at: Utc::now(),
        }
    }

    #[test]
    fn row_numbers_never_fall_back_to_id_prefixes() {
        let staged = vec![staged_row("5f0c2a9e-0000"), staged_row("ab12cd34-0000")];

        assert_eq!(resolve_staged_target(&staged, "1"), Some("5f0c2a9e-0000".to_string()));
        assert_eq!(resolve_staged_target(&staged, "5"), None);
        assert_eq!(resolve_staged_target(&staged, "0"), None);
    }

    #[test]
    fn id_prefixes_must_be_unique() {
        let staged = vec![staged_row("ab12cd34-0000"), staged_row("ab99ef00-0000")];

        assert_eq!(resolve_staged_target(&staged, "ab12"), Some("ab12cd34-0000".to_string()));
        assert_eq!(resolve_staged_target(&staged, "ab"), None);
        assert_eq!(resolve_staged_target(&staged, "zz"), None);
    }

    #[test]
    fn blank_and_unknown_lines() {
        assert_eq!(parse_command("   "), Ok(Command::Empty));
        assert_eq!(
            parse_command("dance"),
            Err(CommandError::Unknown("dance".to_string()))
        );
    }

    #[test]
    fn describe_path_reads_name_and_size_only() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("fattura_99.pdf");
        fs::write(&path, vec![0u8; 1500]).unwrap();

        let raw = describe_path(&path).unwrap();
        assert_eq!(raw.name, "fattura_99.pdf");
        assert_eq!(raw.size, 1500);
        assert_eq!(raw.mime_type, None);
        assert!(raw.last_modified_at.is_some());

        assert!(describe_path(temp.path()).is_err());
        assert!(describe_path(&temp.path().join("missing.pdf")).is_err());
    }
}
