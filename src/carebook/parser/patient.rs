use crate::commands::{add, delete, edit, find, Command, EditPatientDescriptor};
use crate::error::{CarebookError, Result};
use crate::model::{Address, Name, Patient, Phone, Tags};

use super::parse_index;
use super::tokenizer::{
    tokenize, ArgumentMultimap, Prefix, PREFIX_ADDRESS, PREFIX_NAME, PREFIX_PHONE, PREFIX_TAG,
};

const PATIENT_PREFIXES: &[Prefix] = &[PREFIX_NAME, PREFIX_PHONE, PREFIX_ADDRESS, PREFIX_TAG];

pub fn parse_add(args: &str) -> Result<Command> {
    let map = tokenize(args, PATIENT_PREFIXES);
    let (Some(name), Some(phone), Some(address)) = (
        map.value(PREFIX_NAME),
        map.value(PREFIX_PHONE),
        map.value(PREFIX_ADDRESS),
    ) else {
        return Err(CarebookError::InvalidFormat(add::USAGE.to_string()));
    };
    if !map.preamble().is_empty() {
        return Err(CarebookError::InvalidFormat(add::USAGE.to_string()));
    }
    map.verify_no_duplicates(&[PREFIX_NAME, PREFIX_PHONE, PREFIX_ADDRESS])?;

    Ok(Command::Add(Patient::new(
        Name::parse(name)?,
        Phone::parse(phone)?,
        Address::parse(address)?,
        Tags::parse(map.all_values(PREFIX_TAG))?,
    )))
}

pub fn parse_edit(args: &str) -> Result<Command> {
    let map = tokenize(args, PATIENT_PREFIXES);
    let index = parse_index(map.preamble(), edit::USAGE)?;
    map.verify_no_duplicates(&[PREFIX_NAME, PREFIX_PHONE, PREFIX_ADDRESS])?;

    let descriptor = EditPatientDescriptor {
        name: map.value(PREFIX_NAME).map(Name::parse).transpose()?,
        phone: map.value(PREFIX_PHONE).map(Phone::parse).transpose()?,
        address: map.value(PREFIX_ADDRESS).map(Address::parse).transpose()?,
        tags: parse_tags_for_edit(&map)?,
    };
    if !descriptor.is_any_field_edited() {
        return Err(CarebookError::Validation(edit::MESSAGE_NOT_EDITED.to_string()));
    }

    Ok(Command::Edit { index, descriptor })
}

/// A lone empty `t/` clears every tag.
fn parse_tags_for_edit(map: &ArgumentMultimap) -> Result<Option<Tags>> {
    let raw = map.all_values(PREFIX_TAG);
    match raw {
        [] => Ok(None),
        [only] if only.is_empty() => Ok(Some(Tags::new())),
        _ => Tags::parse(raw).map(Some),
    }
}

pub fn parse_delete(args: &str) -> Result<Command> {
    Ok(Command::Delete(parse_index(args, delete::USAGE)?))
}

pub fn parse_find(args: &str) -> Result<Command> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(CarebookError::InvalidFormat(find::USAGE.to_string()));
    }
    Ok(Command::Find(keywords))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::DisplayIndex;

    #[test]
    fn add_with_all_fields() {
        let command =
            parse_add(" n/Amy Bee p/11111111 a/Block 312, Amy Street 1 t/anxiety").unwrap();
        let Command::Add(patient) = command else {
            panic!("expected add");
        };
        assert_eq!(patient.name().as_str(), "Amy Bee");
        assert_eq!(patient.address().as_str(), "Block 312, Amy Street 1");
        assert!(patient.tags().contains("anxiety"));
        assert!(patient.notes().is_empty());
    }

    #[test]
    fn add_requires_name_phone_and_address() {
        let err = parse_add(" n/Amy Bee p/11111111").unwrap_err();
        assert!(matches!(err, CarebookError::InvalidFormat(_)));
        assert!(parse_add(" junk n/Amy p/111 a/x").is_err());
    }

    #[test]
    fn add_rejects_repeated_fields_and_bad_values() {
        assert!(matches!(
            parse_add(" n/Amy n/Bob p/111 a/x"),
            Err(CarebookError::InvalidFormat(_))
        ));
        assert!(matches!(
            parse_add(" n/Amy p/12a a/x"),
            Err(CarebookError::Validation(_))
        ));
    }

    #[test]
    fn edit_collects_given_fields() {
        let command = parse_edit(" 2 p/91234567 t/").unwrap();
        let Command::Edit { index, descriptor } = command else {
            panic!("expected edit");
        };
        assert_eq!(index, DisplayIndex::from_one_based(2));
        assert_eq!(descriptor.phone.unwrap().as_str(), "91234567");
        assert!(descriptor.tags.unwrap().is_empty());
        assert!(descriptor.name.is_none());
    }

    #[test]
    fn edit_without_fields() {
        let err = parse_edit(" 1").unwrap_err();
        assert_eq!(err.to_string(), "At least one field to edit must be provided.");
    }

    #[test]
    fn edit_with_bad_index() {
        for args in [" 0 n/Amy", " -1 n/Amy", " n/Amy", " one n/Amy"] {
            assert!(
                matches!(parse_edit(args), Err(CarebookError::InvalidFormat(_))),
                "{}",
                args
            );
        }
    }

    #[test]
    fn delete_and_find() {
        assert_eq!(
            parse_delete(" 3").unwrap(),
            Command::Delete(DisplayIndex::from_one_based(3))
        );
        assert!(parse_delete(" 3 4").is_err());
        assert_eq!(
            parse_find(" alice  bob ").unwrap(),
            Command::Find(vec!["alice".into(), "bob".into()])
        );
        assert!(parse_find("   ").is_err());
    }
}
