use serde::de::DeserializeOwned;

/// Loads a CSV from disk into a [`Vec`], in file order
/// # Error
/// Errors if the file cannot be read or a row cannot be deserialized
pub(crate) fn load<D: DeserializeOwned>(path: &std::path::Path) -> Result<Vec<D>, csv::Error> {
    let data = std::fs::read(path)?;
    let rows = deserialize(&data).collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

pub(crate) fn deserialize<'a, D: DeserializeOwned + 'a>(
    data: &'a [u8],
) -> impl Iterator<Item = Result<D, csv::Error>> + 'a {
    let rdr = csv::ReaderBuilder::new()
        .delimiter(b',')
        .trim(csv::Trim::All)
        .from_reader(std::io::Cursor::new(data));
    rdr.into_deserialize()
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(serde::Deserialize, Debug, PartialEq)]
    struct Row {
        name: String,
        value: f64,
        year: Option<u16>,
    }

    #[test]
    fn work() {
        let data = b"name, value, year\na, 1.5, 2001\nb, 2,\n";
        let rows = deserialize::<Row>(data)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(
            rows,
            vec![
                Row {
                    name: "a".to_string(),
                    value: 1.5,
                    year: Some(2001),
                },
                Row {
                    name: "b".to_string(),
                    value: 2.0,
                    year: None,
                },
            ]
        );
    }

    #[test]
    fn bad_row() {
        let data = b"name,value,year\na,not-a-number,\n";
        assert!(deserialize::<Row>(data).next().unwrap().is_err());
    }
}
