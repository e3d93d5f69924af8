use crate::models::{Associate, ReviewStatus};
use crate::store::Store;
use crate::views::debounce::Debounced;
use crate::views::{paginate, Page};

pub const DIRECTORY_PAGE_SIZE: usize = 8;

/// Directory filter: case-insensitive substring on the name AND exact
/// category match. An empty search or absent category matches everything.
pub fn filter_associates<'a>(
    items: &'a [Associate],
    search: &str,
    category: Option<&str>,
) -> Vec<&'a Associate> {
    let needle = search.trim().to_lowercase();
    items
        .iter()
        .filter(|associate| {
            (needle.is_empty() || associate.name.to_lowercase().contains(&needle))
                && category.is_none_or(|c| associate.category == c)
        })
        .collect()
}

/// State behind the public associate directory: the collection loaded once
/// per view, the active filters, and the current page. Changing the search
/// or the category resets to page 1; raw typing is debounced before it
/// becomes the active search.
pub struct AssociateDirectory {
    all: Vec<Associate>,
    search: String,
    category: Option<String>,
    page: usize,
    search_input: Debounced<String>,
}

impl AssociateDirectory {
    pub fn new() -> Self {
        Self {
            all: Vec::new(),
            search: String::new(),
            category: None,
            page: 1,
            search_input: Debounced::default(),
        }
    }

    /// Re-fetches the whole collection. Called once when the view opens and
    /// again after every mutation.
    pub async fn reload(&mut self, store: &Store) -> Result<(), sqlx::Error> {
        self.all = store.list_associates().await?;
        Ok(())
    }

    pub fn loaded(&self) -> &[Associate] {
        &self.all
    }

    /// Applies a search immediately (input that already settled, e.g. a
    /// query-string parameter).
    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        if search != self.search {
            self.search = search;
            self.page = 1;
        }
    }

    pub fn set_category(&mut self, category: Option<String>) {
        if category != self.category {
            self.category = category;
            self.page = 1;
        }
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Buffers a keystroke; nothing filters until the input settles.
    pub fn type_search(&mut self, input: impl Into<String>) {
        self.search_input.push(input.into());
    }

    /// Waits out the debounce window and applies the final input. Returns
    /// whether the active search changed.
    pub async fn settle_search(&mut self) -> bool {
        match self.search_input.settle().await {
            Some(settled) if settled != self.search => {
                self.search = settled;
                self.page = 1;
                true
            }
            _ => false,
        }
    }

    /// The page the visitor sees: approved members only, filtered and
    /// paginated.
    pub fn visible(&self) -> Page<Associate> {
        let approved: Vec<Associate> = self
            .all
            .iter()
            .filter(|a| a.status == ReviewStatus::Approved)
            .cloned()
            .collect();
        let filtered: Vec<Associate> =
            filter_associates(&approved, &self.search, self.category.as_deref())
                .into_iter()
                .cloned()
                .collect();
        paginate(&filtered, self.page, DIRECTORY_PAGE_SIZE)
    }
}

impl Default for AssociateDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::models::Registration;

    fn associate(name: &str, category: &str, status: ReviewStatus) -> Associate {
        Associate {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category: category.to_string(),
            logo_url: format!("https://example.org/media/logos/{name}.png"),
            instagram: None,
            site_url: None,
            registration: Registration::default(),
            status,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn sample_directory() -> Vec<Associate> {
        vec![
            associate("Hotel Serra", "Hospedagem", ReviewStatus::Approved),
            associate("Hotel do Lago", "Hospedagem", ReviewStatus::Approved),
            associate("Pousada Alpina", "Hospedagem", ReviewStatus::Approved),
            associate("Restaurante Mirante", "Gastronomia", ReviewStatus::Approved),
            associate("Café da Praça", "Gastronomia", ReviewStatus::Approved),
            associate("Agência Trilhas", "Passeios", ReviewStatus::Approved),
            associate("Hotel Fazenda Boa Vista", "Agroturismo", ReviewStatus::Approved),
            associate("Cervejaria do Vale", "Gastronomia", ReviewStatus::Approved),
            associate("Parque de Aventuras", "Passeios", ReviewStatus::Approved),
            associate("Artesanato da Serra", "Comércio", ReviewStatus::Approved),
        ]
    }

    #[test]
    fn search_and_category_filters_intersect() {
        let items = sample_directory();
        let hospedagem = filter_associates(&items, "", Some("Hospedagem"));
        assert_eq!(hospedagem.len(), 3);

        let both = filter_associates(&items, "hotel", Some("Hospedagem"));
        let names: Vec<&str> = both.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Hotel Serra", "Hotel do Lago"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let items = sample_directory();
        assert_eq!(filter_associates(&items, "POUSADA", None).len(), 1);
    }

    #[test]
    fn directory_hides_unapproved_members() {
        let mut directory = AssociateDirectory::new();
        directory.all = vec![
            associate("Hotel Serra", "Hospedagem", ReviewStatus::Approved),
            associate("Hotel Novo", "Hospedagem", ReviewStatus::Pending),
            associate("Hotel Antigo", "Hospedagem", ReviewStatus::Rejected),
        ];
        let page = directory.visible();
        assert_eq!(page.total_items, 1);
        assert_eq!(page.items[0].name, "Hotel Serra");
    }

    #[test]
    fn filter_changes_reset_the_page() {
        let mut directory = AssociateDirectory::new();
        directory.all = sample_directory();
        directory.set_page(2);
        directory.set_category(Some("Gastronomia".to_string()));
        assert_eq!(directory.visible().page, 1);

        directory.set_page(2);
        directory.set_search("hotel");
        assert_eq!(directory.visible().page, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn typed_input_applies_after_the_debounce_window() {
        let mut directory = AssociateDirectory::new();
        directory.all = sample_directory();

        directory.type_search("h");
        directory.type_search("ho");
        directory.type_search("hotel");

        assert!(directory.settle_search().await);
        let page = directory.visible();
        assert_eq!(page.total_items, 3);

        // Nothing pending: settling again is a no-op.
        assert!(!directory.settle_search().await);
    }
}
