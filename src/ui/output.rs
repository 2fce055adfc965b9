use apiconsole::config::{ConfigWarning, WarningKind};

use crate::ui::theme::{icon, icons, icons_ascii};

pub fn print_config_warnings(warnings: &[ConfigWarning], unicode: bool) {
    let warn = icon(unicode, icons::WARNING, icons_ascii::WARNING);
    for w in warnings {
        let location = match w.line {
            Some(line) => format!("{}:{}", w.file.display(), line),
            None => w.file.display().to_string(),
        };

        match w.kind {
            WarningKind::UnknownKey => {
                eprintln!("{} Unknown config key '{}' in {}", warn, w.key, location)
            }
            WarningKind::DuplicateMenuKey => {
                eprintln!("{} Duplicate menu key '{}' in {}", warn, w.key, location)
            }
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}
