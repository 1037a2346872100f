use anyhow::Result;
use book_catalog::utils::validation::Validate;
use book_catalog::{Book, Catalog, CatalogConfig, CatalogError};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    Ok(file)
}

#[test]
fn test_seeded_catalog_supports_every_operation() -> Result<()> {
    let file = write_config(
        r#"
[catalog]
name = "indonesian-shelf"

[[books]]
title = "Dunia Sophie"
author = "Jostein Gaarder"
rating = 4

[[books]]
title = "Hujan"
author = "Tere Liye"
rating = 4

[[books]]
title = "Pulang"
author = "Tere Liye"
"#,
    )?;

    let config = CatalogConfig::from_file(file.path())?;
    config.validate()?;
    let mut catalog = config.build_catalog()?;

    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.highest_rated().map(Book::title), Some("Dunia Sophie"));
    assert_eq!(catalog.find_by_author("Tere Liye").len(), 2);

    catalog.rate("Pulang", 5)?;
    assert_eq!(catalog.highest_rated().map(Book::title), Some("Pulang"));

    assert_eq!(catalog.remove("Hujan"), 1);
    assert_eq!(catalog.search("Tere").len(), 1);
    Ok(())
}

#[test]
fn test_invalid_seed_rating_is_rejected() -> Result<()> {
    let file = write_config(
        r#"
[catalog]
name = "shelf"

[[books]]
title = "Hujan"
author = "Tere Liye"
rating = -2
"#,
    )?;

    let config = CatalogConfig::from_file(file.path())?;
    assert!(config.validate().is_err());
    assert!(matches!(
        config.build_catalog(),
        Err(CatalogError::ValidationError { .. })
    ));
    Ok(())
}

#[test]
fn test_catalog_from_plain_seed_list() -> Result<()> {
    let seeds = vec![
        book_catalog::BookSeed::new("Hujan", "Tere Liye").rated(3),
        book_catalog::BookSeed::new("Hujan", "Tere Liye"),
    ];
    let catalog = Catalog::from_source(&seeds)?;

    let ratings: Vec<u8> = catalog.iter().map(Book::rating).collect();
    assert_eq!(ratings, vec![3, 0]);
    Ok(())
}
