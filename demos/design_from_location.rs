use bioclima::{tower_extents, Bioclima, BioclimaError, LatLon, TowerLayout};

#[tokio::main]
async fn main() -> Result<(), BioclimaError> {
    let client = Bioclima::new();
    let mexico_city = LatLon(19.4326, -99.1332);

    let design = client
        .design()
        .location(mexico_city)
        .year(2020)
        .call()
        .await?;

    println!("source: {}", design.provenance);
    for warning in &design.warnings {
        println!("note: {warning}");
    }
    println!("conceptual heights: {:?}", design.heights.values());

    for tower in tower_extents(&design.heights, TowerLayout::default()) {
        println!(
            "{}: base z {:.1}, top z {:.2}",
            tower.month_label, tower.base_z, tower.top_z
        );
    }
    Ok(())
}
