use crate::lang::Lang;

pub(super) fn default_host() -> String {
    "127.0.0.1".to_string()
}

pub(super) fn default_port() -> u16 {
    8080
}

pub(super) fn default_db_path() -> String {
    "~/.witaj/witaj.db".to_string()
}

pub(super) fn default_languages() -> Vec<Lang> {
    vec![
        Lang::fallback(),
        Lang {
            id: 2,
            welcome_message: "Cześć".to_string(),
            code: "pl".to_string(),
        },
    ]
}
