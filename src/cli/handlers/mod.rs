mod init;
pub use init::cmd_init;

use std::path::{Path, PathBuf};

use crate::cli::commands::*;
use crate::cli::output;
use crate::io::dump_io;
use crate::model::item::ListName;
use crate::ops::list_ops::{self, FieldEdit};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let file = PathBuf::from(&cli.file);

    match cli.command {
        Commands::Init(args) => cmd_init(&file, args),
        Commands::Show(args) => cmd_show(&file, args, json),
        Commands::Move(args) => cmd_move(&file, args),
        Commands::Edit(args) => cmd_edit(&file, args),
        Commands::Export(args) => cmd_export(&file, args),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_list_name(s: &str) -> Result<ListName, String> {
    ListName::from_name(s)
        .ok_or_else(|| format!("unknown list: {} (expected open, purchased, or rejected)", s))
}

/// Parse a CLI field/value pair into a typed edit. Field names match the
/// dump-file spelling.
fn parse_field_edit(field: &str, value: &str) -> Result<FieldEdit, String> {
    match field {
        "name" => Ok(FieldEdit::Name(value.to_string())),
        "link" => Ok(FieldEdit::Link(value.to_string())),
        "price" => {
            let price: f64 = value
                .parse()
                .map_err(|_| format!("not a price: {}", value))?;
            Ok(FieldEdit::Price(price))
        }
        "createTime" => Ok(FieldEdit::CreateTime(value.to_string())),
        "processTime" => Ok(FieldEdit::ProcessTime(value.to_string())),
        "acceptNote" => Ok(FieldEdit::AcceptNote(value.to_string())),
        "rejectNote" => Ok(FieldEdit::RejectNote(value.to_string())),
        _ => Err(format!("unknown field: {}", field)),
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_show(file: &Path, args: ShowArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let wishlist = dump_io::read_dump(file)?;
    let lists: Vec<ListName> = match args.list {
        Some(name) => vec![parse_list_name(&name)?],
        None => ListName::ALL.to_vec(),
    };

    if json {
        output::print_lists_json(&wishlist, &lists)?;
    } else {
        output::print_lists(&wishlist, &lists);
    }
    Ok(())
}

fn cmd_move(file: &Path, args: MoveArgs) -> Result<(), Box<dyn std::error::Error>> {
    let source = parse_list_name(&args.source)?;
    let destination = parse_list_name(&args.destination)?;

    let mut wishlist = dump_io::read_dump(file)?;
    list_ops::move_item(
        &mut wishlist,
        source,
        args.index,
        destination,
        args.note.as_deref(),
    )?;
    dump_io::write_dump(file, &wishlist)?;

    // The moved item is now at the front of its destination list.
    println!(
        "moved '{}' from {} to {}",
        wishlist.list(destination)[0].name,
        source,
        destination
    );
    Ok(())
}

fn cmd_edit(file: &Path, args: EditArgs) -> Result<(), Box<dyn std::error::Error>> {
    let list = parse_list_name(&args.list)?;
    let edit = parse_field_edit(&args.field, &args.value)?;

    let mut wishlist = dump_io::read_dump(file)?;
    list_ops::edit_field(&mut wishlist, list, args.index, edit)?;
    dump_io::write_dump(file, &wishlist)?;

    println!("updated {} of {} item {}", args.field, list, args.index);
    Ok(())
}

fn cmd_export(file: &Path, args: ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let wishlist = dump_io::read_dump(file)?;
    let dir = match args.dir {
        Some(dir) => PathBuf::from(dir),
        None => file.parent().unwrap_or(Path::new(".")).to_path_buf(),
    };

    let path = dump_io::export_dump(&dir, &wishlist)?;
    println!("exported {}", path.display());
    Ok(())
}
