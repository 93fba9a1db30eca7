pub const REVISION_PREFIX: &str = "Revised date:";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OfferLines {
    pub offer_type: String,
    pub type_of_work: String,
    pub description: String,
    pub company_name: String,
    pub address: String,
}

impl Default for OfferLines {
    fn default() -> Self {
        Self {
            offer_type: "Technical Offer".to_string(),
            type_of_work: String::new(),
            description: "For".to_string(),
            company_name: String::new(),
            address: String::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OfferField {
    OfferType,
    TypeOfWork,
    Description,
    CompanyName,
    Address,
}

impl OfferField {
    pub fn all() -> &'static [Self] {
        &[
            Self::OfferType,
            Self::TypeOfWork,
            Self::Description,
            Self::CompanyName,
            Self::Address,
        ]
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Self::OfferType => "offer.offer_type",
            Self::TypeOfWork => "offer.type_of_work",
            Self::Description => "offer.description",
            Self::CompanyName => "offer.company_name",
            Self::Address => "offer.address",
        }
    }
}

impl OfferLines {
    pub fn get(&self, field: OfferField) -> &str {
        match field {
            OfferField::OfferType => &self.offer_type,
            OfferField::TypeOfWork => &self.type_of_work,
            OfferField::Description => &self.description,
            OfferField::CompanyName => &self.company_name,
            OfferField::Address => &self.address,
        }
    }

    pub fn set(&mut self, field: OfferField, value: String) {
        let slot = match field {
            OfferField::OfferType => &mut self.offer_type,
            OfferField::TypeOfWork => &mut self.type_of_work,
            OfferField::Description => &mut self.description,
            OfferField::CompanyName => &mut self.company_name,
            OfferField::Address => &mut self.address,
        };
        *slot = value;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompanyField {
    pub label: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct QuoteMeta {
    pub quote_no: String,
    pub rev_no: String,
    pub project_name: String,
    pub quote_date: String,
}

/// Free-text parts of the quotation outside the item table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuoteDetails {
    pub offer: OfferLines,
    pub project_left: String,
    pub project_right: String,
    pub revisions: Vec<String>,
    pub company: Vec<CompanyField>,
    pub meta: QuoteMeta,
}

impl Default for QuoteDetails {
    fn default() -> Self {
        let company = [
            "Purchaser",
            "Contact Person",
            "Address",
            "GSTIN",
            "Phone",
            "Email",
        ]
        .into_iter()
        .map(|label| CompanyField {
            label: label.to_string(),
            value: String::new(),
        })
        .collect();

        Self {
            offer: OfferLines::default(),
            project_left: String::new(),
            project_right: String::new(),
            revisions: Vec::new(),
            company,
            meta: QuoteMeta::default(),
        }
    }
}

impl QuoteDetails {
    pub fn add_revision(&mut self) -> usize {
        self.revisions.push(REVISION_PREFIX.to_string());
        self.revisions.len() - 1
    }

    pub fn set_revision(&mut self, index: usize, text: String) -> bool {
        match self.revisions.get_mut(index) {
            Some(line) => {
                *line = text;
                true
            }
            None => false,
        }
    }

    pub fn set_company_value(&mut self, index: usize, value: String) -> bool {
        match self.company.get_mut(index) {
            Some(field) => {
                field.value = value;
                true
            }
            None => false,
        }
    }

    /// The first company field names the purchaser in page footers.
    pub fn purchaser(&self) -> &str {
        self.company
            .first()
            .map(|field| field.value.trim())
            .unwrap_or("")
    }

    /// Lines of the right-hand project cell: the project notes followed by
    /// every revision line, with blank lines dropped.
    pub fn project_right_lines(&self) -> Vec<String> {
        collapse_lines(&self.project_right)
            .into_iter()
            .chain(self.revisions.iter().map(|line| line.trim().to_string()))
            .filter(|line| !line.is_empty())
            .collect()
    }

    pub fn project_left_lines(&self) -> Vec<String> {
        collapse_lines(&self.project_left)
    }
}

fn collapse_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
