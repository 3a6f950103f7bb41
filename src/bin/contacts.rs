//! Seeds a name-ordered and a phone-ordered tree with the same handful of contacts, looks one up
//! in each, deletes it again and prints what is left of both trees.

use clap::Parser;
use tracing::{info, warn};

use contact_bst::{ContactRecord, KeyOrder, NameTree, PhoneTree, Result, Tree};

const SAMPLE: [(&str, &str, &str); 9] = [
    ("Cliodhna", "0855881892", "Apt 1"),
    ("Zach", "0884624315", "Apt 2"),
    ("Cory", "0850602678", "Apt 3"),
    ("Betty", "0868026665", "Apt 4"),
    ("Abraham", "0887178084", "Apt 5"),
    ("Jordan", "0858573472", "Apt 6"),
    ("Mary", "0856776227", "Apt 7"),
    ("Joseph", "0873787608", "Apt 8"),
    ("Zed", "0890402726", "Apt 9"),
];

const SEPARATOR: &str = "-----------------";

#[derive(Parser, Debug)]
#[command(name = "contacts")]
#[command(about = "Demonstrates the name and phone contact trees")]
struct Args {
    /// Name to look up in the name tree
    #[arg(long, default_value = "Joseph", env = "CONTACTS_FIND_NAME")]
    find_name: String,

    /// Phone number to look up in the phone tree
    #[arg(long, default_value = "0850602678", env = "CONTACTS_FIND_PHONE")]
    find_phone: String,

    /// Name to delete from the name tree (defaults to --find-name)
    #[arg(long, env = "CONTACTS_DELETE_NAME")]
    delete_name: Option<String>,

    /// Phone number to delete from the phone tree (defaults to --find-phone)
    #[arg(long, env = "CONTACTS_DELETE_PHONE")]
    delete_phone: Option<String>,
}

fn print_lookup(found: Option<&ContactRecord>, key: &str) {
    match found {
        Some(contact) => println!("{contact}\n"),
        None => println!("No entry for {key}\n"),
    }
    println!("{SEPARATOR}");
}

fn delete_or_warn<O: KeyOrder>(tree: &mut Tree<O>, key: &str) {
    if let Err(e) = tree.delete(key) {
        warn!(key, error = %e, "delete failed");
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut name_tree = NameTree::new();
    let mut phone_tree = PhoneTree::new();
    for (name, phone, address) in SAMPLE {
        let contact = ContactRecord::new(name, phone, address);
        name_tree.insert(contact.clone())?;
        phone_tree.insert(contact)?;
    }
    info!(
        contacts = name_tree.len(),
        name_height = name_tree.height(),
        phone_height = phone_tree.height(),
        "trees seeded"
    );

    print_lookup(name_tree.find(&args.find_name), &args.find_name);
    print_lookup(phone_tree.find(&args.find_phone), &args.find_phone);

    let delete_name = args.delete_name.as_deref().unwrap_or(args.find_name.as_str());
    let delete_phone = args.delete_phone.as_deref().unwrap_or(args.find_phone.as_str());
    delete_or_warn(&mut name_tree, delete_name);
    delete_or_warn(&mut phone_tree, delete_phone);

    name_tree.traverse(|contact| println!("{contact}\n"));
    println!("{SEPARATOR}");
    phone_tree.traverse(|contact| println!("{contact}\n"));

    Ok(())
}
