use crate::paths::PathDict;

const REPORT_HEADER: &str = "Named Path Dictionary:";

/// Renders the `key => path [kind]` listing printed after a successful run.
pub fn render_report(dict: &PathDict) -> String {
    let mut report = format!("\n{}\n", REPORT_HEADER);

    for (key, entry) in dict {
        report.push_str(&format!(
            "{:<25} => {} [{}]\n",
            key,
            entry.path.display(),
            entry.kind
        ));
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::PathEntry;

    #[test]
    fn pads_keys_to_a_fixed_column() {
        let dict = PathDict::from([
            ("src".to_string(), PathEntry::dir("out/src")),
            ("src_main".to_string(), PathEntry::file("out/src/main.go")),
        ]);

        let report = render_report(&dict);

        assert_eq!(
            report,
            "\nNamed Path Dictionary:\n\
             src                       => out/src [dir]\n\
             src_main                  => out/src/main.go [file]\n"
        );
    }

    #[test]
    fn long_keys_are_not_truncated() {
        let key = "a_very_long_key_that_exceeds_the_column";
        let dict = PathDict::from([(key.to_string(), PathEntry::dir("x"))]);

        assert!(render_report(&dict).contains(&format!("{} => x [dir]", key)));
    }

    #[test]
    fn empty_dict_prints_only_the_header() {
        assert_eq!(render_report(&PathDict::new()), "\nNamed Path Dictionary:\n");
    }
}
