use anyhow::{Context, Result};
use models_lending::resource::{ResourceKind, ResourceStatus};
use sqlx::SqlitePool;

use models_lending::resource::ResourceKind::{Jeu, Livre};
use models_lending::resource::ResourceStatus::{Disponible, Indisponible};

/// The demo catalog. Titles are unique; seeding skips any title that is
/// already present so the endpoint can be called repeatedly.
const CATALOG: &[(&str, ResourceKind, ResourceStatus)] = &[
    // Livres
    ("1984", Livre, Disponible),
    ("Le Petit Prince", Livre, Disponible),
    ("Harry Potter à l'école des sorciers", Livre, Disponible),
    ("Les Misérables", Livre, Disponible),
    ("L'Étranger", Livre, Disponible),
    ("Don Quichotte", Livre, Disponible),
    ("Moby Dick", Livre, Disponible),
    ("Crime et Châtiment", Livre, Disponible),
    ("Gatsby le Magnifique", Livre, Disponible),
    ("Orgueil et Préjugés", Livre, Disponible),
    ("Le Comte de Monte-Cristo", Livre, Disponible),
    ("La Peste", Livre, Disponible),
    ("Les Fleurs du mal", Livre, Disponible),
    ("Le Rouge et le Noir", Livre, Disponible),
    ("Voyage au centre de la Terre", Livre, Disponible),
    ("Vingt mille lieues sous les mers", Livre, Disponible),
    ("La Métamorphose", Livre, Disponible),
    ("Les Trois Mousquetaires", Livre, Disponible),
    ("Le Seigneur des Anneaux", Livre, Disponible),
    ("Hunger Games", Livre, Disponible),
    ("Dune", Livre, Disponible),
    ("Sherlock Holmes : Une étude en rouge", Livre, Disponible),
    ("L'Île mystérieuse", Livre, Indisponible),
    ("Frankenstein", Livre, Disponible),
    ("Dracula", Livre, Indisponible),
    ("Le Parfum", Livre, Disponible),
    ("Le Nom de la Rose", Livre, Disponible),
    ("La Nuit des temps", Livre, Disponible),
    ("L'Alchimiste", Livre, Indisponible),
    ("Les Hauts de Hurlevent", Livre, Disponible),
    // Jeux de plateau
    ("Catan", Jeu, Indisponible),
    ("Risk", Jeu, Disponible),
    ("Carcassonne", Jeu, Disponible),
    ("Les Aventuriers du Rail", Jeu, Disponible),
    ("Splendor", Jeu, Disponible),
    ("Dixit", Jeu, Disponible),
    ("7 Wonders", Jeu, Disponible),
    ("Terraforming Mars", Jeu, Indisponible),
    ("Azul", Jeu, Disponible),
    ("Pandemic", Jeu, Indisponible),
    ("Kingdomino", Jeu, Disponible),
    ("Codenames", Jeu, Disponible),
    ("Small World", Jeu, Disponible),
    ("Scythe", Jeu, Disponible),
    ("Agricola", Jeu, Disponible),
    ("Everdell", Jeu, Indisponible),
    ("Root", Jeu, Indisponible),
    ("Wingspan", Jeu, Disponible),
    ("Architectes du Royaume de l'Ouest", Jeu, Indisponible),
    ("Brass: Birmingham", Jeu, Disponible),
    ("Spirit Island", Jeu, Disponible),
    ("Gloomhaven", Jeu, Indisponible),
    ("Clank!", Jeu, Indisponible),
    ("Paladins du Royaume de l'Ouest", Jeu, Disponible),
    ("The Crew", Jeu, Disponible),
    ("The Mind", Jeu, Indisponible),
    ("Tapestry", Jeu, Disponible),
    ("Anachrony", Jeu, Indisponible),
    ("Project Gaia", Jeu, Indisponible),
    ("Barrage", Jeu, Disponible),
];

/// Insert the demo catalog, skipping titles that already exist.
/// Returns how many entries were actually added.
pub async fn fill_catalog(db: &SqlitePool) -> Result<u32> {
    let mut added: u32 = 0;

    for (title, kind, status) in CATALOG {
        let existing = sqlx::query_scalar::<_, i64>("SELECT id FROM resources WHERE title = ?1")
            .bind(*title)
            .fetch_optional(db)
            .await
            .with_context(|| format!("unable to check for existing resource {title}"))?;

        if existing.is_none() {
            sqlx::query("INSERT INTO resources (title, kind, status) VALUES (?1, ?2, ?3)")
                .bind(*title)
                .bind(*kind)
                .bind(*status)
                .execute(db)
                .await
                .with_context(|| format!("unable to create resource {title}"))?;
            added += 1;
        }
    }

    Ok(added)
}
