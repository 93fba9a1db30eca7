/// An image read from disk and ready to embed in the document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageUpload {
    pub name: String,
    pub size: u64,
    pub mime: String,
    pub data_url: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryImage {
    pub id: u64,
    pub upload: ImageUpload,
}

impl GalleryImage {
    pub fn size_label(&self) -> String {
        format!("{:.1} KB", self.upload.size as f64 / 1024.0)
    }
}

/// Ordered project images. Ids keep increasing for the whole session, even
/// after removals and clears.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ImageGallery {
    images: Vec<GalleryImage>,
    last_id: u64,
}

impl ImageGallery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn images(&self) -> &[GalleryImage] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn add(&mut self, upload: ImageUpload) -> u64 {
        self.last_id += 1;
        self.images.push(GalleryImage {
            id: self.last_id,
            upload,
        });
        self.last_id
    }

    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.images.len();
        self.images.retain(|image| image.id != id);
        self.images.len() != before
    }

    pub fn position(&self, id: u64) -> Option<usize> {
        self.images.iter().position(|image| image.id == id)
    }

    /// Moves the image at `from` so it ends up at `to`. Targets outside the
    /// gallery are ignored.
    pub fn move_image(&mut self, from: usize, to: usize) -> bool {
        if from >= self.images.len() || to >= self.images.len() || from == to {
            return false;
        }
        let image = self.images.remove(from);
        self.images.insert(to, image);
        true
    }

    pub fn move_up(&mut self, index: usize) -> bool {
        index
            .checked_sub(1)
            .map(|to| self.move_image(index, to))
            .unwrap_or(false)
    }

    pub fn move_down(&mut self, index: usize) -> bool {
        self.move_image(index, index + 1)
    }

    /// Drop handler: places the dragged image at the target's position.
    pub fn drop_onto(&mut self, dragged_id: u64, target_index: usize) -> bool {
        match self.position(dragged_id) {
            Some(from) => self.move_image(from, target_index),
            None => false,
        }
    }

    /// Returns how many images were removed.
    pub fn clear(&mut self) -> usize {
        let count = self.images.len();
        self.images.clear();
        count
    }

    pub fn sources(&self) -> Vec<String> {
        self.images
            .iter()
            .map(|image| image.upload.data_url.clone())
            .collect()
    }
}
