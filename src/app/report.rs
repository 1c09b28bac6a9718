use crate::config::OutputFormat;
use crate::domain::model::{Place, Selection};
use crate::utils::error::Result;
use serde_json::json;

pub fn render(selection: &Selection, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(selection)),
        OutputFormat::Json => render_json(selection),
        OutputFormat::Csv => render_csv(&selection.places),
    }
}

fn render_place(out: &mut String, place: &Place) {
    out.push_str(&format!("{}: \n", place.name));
    for (label, value) in place.attributes() {
        out.push_str(&format!("\t{}: {}\n", label, value));
    }
}

/// Every place, then the random pick.
pub fn render_table(selection: &Selection) -> String {
    let mut out = format!("Total Number of Results: {}\n", selection.places.len());
    for place in &selection.places {
        render_place(&mut out, place);
        out.push('\n');
    }

    out.push_str("---------------- RANDOM CHOICE --------------------\n");
    render_place(&mut out, selection.choice());
    out
}

pub fn selection_value(selection: &Selection) -> serde_json::Value {
    json!({
        "total": selection.places.len(),
        "choice": selection.choice(),
        "places": selection.places,
    })
}

pub fn render_json(selection: &Selection) -> Result<String> {
    Ok(serde_json::to_string_pretty(&selection_value(selection))?)
}

pub fn render_csv(places: &[Place]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for place in places {
        writer.serialize(place)?;
    }
    let data = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8_lossy(&data).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection() -> Selection {
        Selection {
            places: vec![
                Place {
                    name: "Cafe X".to_string(),
                    rating: 4.5,
                    ..Place::default()
                },
                Place {
                    name: "Tea Stall".to_string(),
                    open_now: Some(true),
                    price_level: Some(1),
                    distance_miles: 0.5,
                    address: "Old Munnar".to_string(),
                    ..Place::default()
                },
            ],
            chosen: 1,
        }
    }

    #[test]
    fn test_table() {
        let table = render_table(&selection());

        assert!(table.starts_with("Total Number of Results: 2\nCafe X: \n\tbusinessStatus: \n\topenNow: \n"));
        assert!(table.contains("\trating: 4.5\n\ttotalUserRatings: -1\n\tdistance: -1\n"));
        let pick = table
            .split("---------------- RANDOM CHOICE --------------------\n")
            .nth(1)
            .unwrap();
        assert!(pick.starts_with("Tea Stall: \n"));
        assert!(pick.contains("\topenNow: true\n\tpriceLevel: 1\n"));
    }

    #[test]
    fn test_json() {
        let parsed: serde_json::Value =
            serde_json::from_str(&render_json(&selection()).unwrap()).unwrap();
        assert_eq!(parsed["total"], 2);
        assert_eq!(parsed["choice"]["name"], "Tea Stall");
        assert_eq!(parsed["places"][0]["rating"], 4.5);
    }

    #[test]
    fn test_csv() {
        let csv = render_csv(&selection().places).unwrap();
        let mut lines = csv.lines();

        assert_eq!(
            lines.next().unwrap(),
            "name,businessStatus,openNow,priceLevel,rating,totalUserRatings,distanceMiles,address"
        );
        assert_eq!(lines.next().unwrap(), "Cafe X,,,,4.5,-1,-1.0,");
        assert_eq!(lines.next().unwrap(), "Tea Stall,,true,1,-1.0,-1,0.5,Old Munnar");
    }
}
