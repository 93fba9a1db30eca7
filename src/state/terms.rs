#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TermRow {
    pub description: String,
    pub value: String,
}

/// Price schedule: the main row "1" and its lettered sub-rows.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct PriceTerms {
    pub heading: TermRow,
    sub_rows: Vec<TermRow>,
}

impl PriceTerms {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sub_rows(&self) -> &[TermRow] {
        &self.sub_rows
    }

    pub fn add_sub_row(&mut self) -> usize {
        self.sub_rows.push(TermRow::default());
        self.sub_rows.len() - 1
    }

    pub fn delete_sub_row(&mut self, index: usize) -> bool {
        if index >= self.sub_rows.len() {
            return false;
        }
        self.sub_rows.remove(index);
        true
    }

    pub fn sub_row_mut(&mut self, index: usize) -> Option<&mut TermRow> {
        self.sub_rows.get_mut(index)
    }

    /// Labels follow position, so deleting a row relabels everything after it.
    pub fn export_rows(&self) -> Vec<[String; 3]> {
        std::iter::once([
            "1".to_string(),
            self.heading.description.trim().to_string(),
            self.heading.value.trim().to_string(),
        ])
        .chain(self.sub_rows.iter().enumerate().map(|(idx, row)| {
            [
                sub_row_label(idx),
                row.description.trim().to_string(),
                row.value.trim().to_string(),
            ]
        }))
        .collect()
    }
}

/// 0 -> "1A", 25 -> "1Z", 26 -> "1AA".
pub fn sub_row_label(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    letters.reverse();
    let mut label = String::from("1");
    label.extend(letters);
    label
}
