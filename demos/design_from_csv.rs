use bioclima::{Bioclima, BioclimaError, LatLon, MONTH_LABELS};

const MONTHLY_CSV: &str = "tmax,tmin,viento,radiacion\n\
    25,12,3,150\n27,13,3.5,160\n30,15,4,180\n32,17,4.5,200\n\
    35,19,5,220\n36,20,5.2,230\n34,19,4.8,210\n33,18,4.5,200\n\
    31,16,4.2,190\n29,14,3.8,170\n27,13,3.5,160\n25,12,3,150\n";

#[tokio::main]
async fn main() -> Result<(), BioclimaError> {
    let client = Bioclima::new();

    let design = client
        .design()
        .location(LatLon(19.4326, -99.1332))
        .csv(MONTHLY_CSV.as_bytes().to_vec())
        .use_remote(false)
        .call()
        .await?;

    println!("source: {}", design.provenance);
    for (label, height) in MONTH_LABELS.iter().zip(design.heights.values()) {
        println!("{label}: {height:.1}");
    }
    Ok(())
}
