use crate::cli::InspectArgs;
use crate::error::Result;
use crate::render;
use atomstyles::ColumnLayout;
use tracing::info;

pub fn run(args: InspectArgs) -> Result<()> {
    let output = inspect(&args)?;
    print!("{}", output);
    Ok(())
}

fn inspect(args: &InspectArgs) -> Result<String> {
    let columns: Vec<String> = args
        .columns
        .iter()
        .flat_map(|arg| arg.split_whitespace())
        .map(str::to_string)
        .collect();
    info!("Inspecting {} columns.", columns.len());

    let layout = ColumnLayout::from_columns(columns)?;
    render::layout(&layout, args.format)
}
