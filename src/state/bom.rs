/// Bill of materials as pasted by the user.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum BomContent {
    #[default]
    Empty,
    /// Spreadsheet paste: the first line is the header.
    Table {
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Text(String),
}

impl BomContent {
    /// Tab-separated text becomes a table; anything else is kept as text.
    pub fn from_paste(text: &str) -> Self {
        if text.trim().is_empty() {
            return Self::Empty;
        }
        if !text.contains('\t') {
            return Self::Text(text.trim().to_string());
        }

        let mut lines = text
            .trim()
            .lines()
            .map(|line| line.split('\t').map(|cell| cell.trim().to_string()).collect());
        let header = lines.next().unwrap_or_default();
        Self::Table {
            header,
            rows: lines.collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Table { header, rows } => {
                header.iter().chain(rows.iter().flatten()).all(|cell| cell.is_empty())
            }
            Self::Text(text) => text.trim().is_empty(),
        }
    }
}
