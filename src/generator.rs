use std::path::Path;

use anyhow::{Context, Result};
use rand::Rng;
use tokio::{
    fs::File,
    io::{AsyncWriteExt, BufWriter},
};

use crate::models::{Person, Sex};

const MALE_NAMES: [&str; 6] = ["Tom", "Johnny", "Jim", "Eric", "Frank", "Will"];
const FEMALE_NAMES: [&str; 5] = ["Amanda", "Grace", "Judy", "Sally", "Mary"];
const SURNAMES: [&str; 8] = [
    "Smith", "Brown", "Walker", "Okafor", "Lindqvist", "Moreau", "Tanaka", "Doe",
];
const MAX_CHILDREN: usize = 3;

fn random_person<R: Rng>(rng: &mut R, surname: &str) -> Person {
    let sex = if rng.random_bool(0.5) {
        Sex::Male
    } else {
        Sex::Female
    };
    let name = match sex {
        Sex::Male => MALE_NAMES[rng.random_range(0..MALE_NAMES.len())],
        Sex::Female => FEMALE_NAMES[rng.random_range(0..FEMALE_NAMES.len())],
    };

    Person::new(name, surname, sex)
}

/// Builds one root with up to two generations below it. A grandchild is named
/// after the root now and then, so some roots end up as matches.
pub fn random_family<R: Rng>(rng: &mut R) -> Person {
    let surname = SURNAMES[rng.random_range(0..SURNAMES.len())];
    let root = random_person(rng, surname);

    let children = (0..rng.random_range(0..=MAX_CHILDREN))
        .map(|_| {
            let child = random_person(rng, surname);
            let grandchildren = (0..rng.random_range(0..=MAX_CHILDREN))
                .map(|_| {
                    let mut grandchild = random_person(rng, surname);
                    if rng.random_ratio(1, 4) {
                        grandchild.name = root.name.clone();
                        grandchild.sex = root.sex;
                    }
                    grandchild
                })
                .collect();
            child.with_children(grandchildren)
        })
        .collect();

    root.with_children(children)
}

pub async fn create_file(path: &Path, number_people: u32) -> Result<()> {
    tracing::info!("Creating data file {}", path.display());

    let start = std::time::Instant::now();

    let mut rng = rand::rng();
    let persons: Vec<Person> = (0..number_people)
        .map(|_| random_family(&mut rng))
        .collect();

    let json = serde_json::to_vec_pretty(&persons).context("Could not serialize persons")?;

    let file = File::create(path)
        .await
        .with_context(|| format!("Could not create data file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&json).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;

    tracing::info!(
        "Data file with {} root records created in {:?}",
        persons.len(),
        start.elapsed()
    );

    Ok(())
}
