use contact_bst::{ContactRecord, Directory};

use crate::{contact, key, Op};

/// Both indexes must list exactly the same records.
fn indexes_agree(directory: &Directory) -> bool {
    let mut by_name: Vec<&ContactRecord> = directory.by_name().iter().collect();
    let mut by_phone: Vec<&ContactRecord> = directory.by_phone().iter().collect();
    by_name.sort_by(|a, b| a.phone().cmp(b.phone()));
    by_phone.sort_by(|a, b| a.phone().cmp(b.phone()));

    by_name == by_phone
}

#[quickcheck]
fn indexes_stay_in_step(ops: Vec<Op>) -> bool {
    let mut directory = Directory::new();

    for op in ops {
        match op {
            Op::Insert(name, phone) => {
                if directory.add(contact(name, phone)).is_err() {
                    return false;
                }
            }
            Op::Remove(name) => {
                let _ = directory.remove_by_name(&key(name));
            }
            Op::Iter => {
                if !indexes_agree(&directory) {
                    return false;
                }
            }
        }
    }

    indexes_agree(&directory) && directory.len() == directory.by_phone().len()
}
