use std::path::Path;

use lsys_plot::prelude::*;
use lsys_plot::render::save;

fn main() -> anyhow::Result<()> {
    // Same text format the rule box of a form would hold.
    let rules = RuleTable::parse("f -> f+f-f-f+f");
    let koch = Grammar::new(rules, "f", 90.0)
        .with_name("Koch curve")
        .with_iterations(4);

    let drawing = koch
        .compute_default()?
        .expect("koch has an iteration count");

    let canvas = Canvas::new(800.0, 300.0)?;
    let doc = drawing.to_document(Arrangement::Fit, &canvas);
    save(Path::new("koch.svg"), &doc)?;

    for preset in presets::all() {
        if let Some(drawing) = preset.compute_default()? {
            let name = preset.name().unwrap_or("unnamed").replace(' ', "_").to_lowercase();
            save(
                Path::new(&format!("{}.svg", name)),
                &drawing.to_document(Arrangement::Fit, &canvas),
            )?;
        }
    }
    Ok(())
}
