use crate::models::Location;

/// Points-of-interest filter, same shape as the other listings: substring
/// match on the name/summary AND exact category.
pub fn filter_locations<'a>(
    items: &'a [Location],
    search: &str,
    category: Option<&str>,
) -> Vec<&'a Location> {
    let needle = search.trim().to_lowercase();
    items
        .iter()
        .filter(|location| {
            let text_match = needle.is_empty()
                || location.nome.to_lowercase().contains(&needle)
                || location.resumo.to_lowercase().contains(&needle);
            text_match && category.is_none_or(|c| location.categoria == c)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(nome: &str, categoria: &str) -> Location {
        Location {
            id: 1,
            nome: nome.to_string(),
            categoria: categoria.to_string(),
            resumo: format!("{nome}, um clássico da região"),
            descricao: String::new(),
            imagem: String::new(),
            endereco: String::new(),
            google_maps_url: String::new(),
        }
    }

    #[test]
    fn filters_by_name_and_category() {
        let items = vec![
            location("Mirante do Vale", "Natureza"),
            location("Cascata Encantada", "Natureza"),
            location("Museu do Imigrante", "Cultura"),
        ];
        assert_eq!(filter_locations(&items, "", Some("Natureza")).len(), 2);
        assert_eq!(filter_locations(&items, "cascata", Some("Natureza")).len(), 1);
        assert_eq!(filter_locations(&items, "cascata", Some("Cultura")).len(), 0);
    }
}
