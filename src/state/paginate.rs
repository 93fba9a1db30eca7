use std::num::NonZeroUsize;

#[derive(Clone, Debug, PartialEq)]
pub enum PageBody<R> {
    Rows(Vec<R>),
    /// Stands in for data rows when there is nothing to show.
    NoItems,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Page<R, S> {
    /// 1-based.
    pub number: usize,
    pub total: usize,
    pub body: PageBody<R>,
    pub summary: Option<S>,
}

impl<R, S> Page<R, S> {
    pub fn rows(&self) -> &[R] {
        match &self.body {
            PageBody::Rows(rows) => rows,
            PageBody::NoItems => &[],
        }
    }

    pub fn is_last(&self) -> bool {
        self.number == self.total
    }

    pub fn label(&self) -> String {
        format!("Page {} of {}", self.number, self.total)
    }
}

/// Splits `rows` into pages of at most `page_size` rows. Always returns at
/// least one page, and only the last page carries `summary`.
pub fn paginate<R: Clone, S>(rows: &[R], page_size: NonZeroUsize, summary: S) -> Vec<Page<R, S>> {
    let bodies: Vec<PageBody<R>> = if rows.is_empty() {
        vec![PageBody::NoItems]
    } else {
        rows.chunks(page_size.get())
            .map(|chunk| PageBody::Rows(chunk.to_vec()))
            .collect()
    };

    let total = bodies.len();
    let mut summary = Some(summary);
    bodies
        .into_iter()
        .enumerate()
        .map(|(idx, body)| {
            let number = idx + 1;
            Page {
                number,
                total,
                body,
                summary: if number == total { summary.take() } else { None },
            }
        })
        .collect()
}
