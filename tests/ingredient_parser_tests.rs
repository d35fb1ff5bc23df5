#[cfg(test)]
mod tests {
    use afx_ingredients::{parse_ingredient, parse_ingredient_list, UnitTag};

    fn assert_parsed(line: &str, name: &str, unit: UnitTag, amount: f64) {
        let record = parse_ingredient(line);
        assert_eq!(record.name, name, "name for {:?}", line);
        assert_eq!(record.quantity_list.len(), 1, "quantity list for {:?}", line);
        assert_eq!(record.quantity_list[0].unit, unit, "unit for {:?}", line);
        assert_eq!(record.quantity_list[0].amount, amount, "amount for {:?}", line);
    }

    #[test]
    fn test_reference_scenarios() {
        assert_parsed("2 cups minced onion", "onion", UnitTag::Cup, 2.0);
        assert_parsed(
            "2 (6 ounce) cans tomato paste",
            "canned tomato paste",
            UnitTag::Ounce,
            12.0,
        );
        assert_parsed("1 pound ground beef", "ground beef", UnitTag::Pound, 1.0);
        assert_parsed("3 cloves garlic", "garlic", UnitTag::Count, 3.0);
        assert_parsed("½ cup water", "water", UnitTag::Cup, 0.5);
        assert_parsed("2 chicken breasts", "chicken breasts", UnitTag::Count, 1.0);
    }

    #[test]
    fn test_lines_without_numbers_default_to_one_count() {
        assert_parsed("butter", "butter", UnitTag::Count, 1.0);
        assert_parsed("salt to taste", "salt to taste", UnitTag::Count, 1.0);
        assert_parsed("freshly cracked pepper", "freshly cracked pepper", UnitTag::Count, 1.0);
    }

    #[test]
    fn test_container_amount_is_count_times_inner_amount() {
        assert_parsed(
            "3 (14.5 oz) cans diced tomatoes",
            "canned diced tomatoes",
            UnitTag::Ounce,
            43.5,
        );
        // An unrecognized inner unit falls back to COUNT but keeps the
        // multiplied amount.
        assert_parsed("2 (6 stick) packages butter", "butter", UnitTag::Count, 12.0);
    }

    #[test]
    fn test_unit_words_match_case_insensitively() {
        assert_parsed("2 CUPS flour", "flour", UnitTag::Cup, 2.0);
        assert_parsed("1 Tablespoon dill", "dill", UnitTag::Tablespoon, 1.0);
    }

    #[test]
    fn test_number_followed_by_non_unit_discards_the_number() {
        assert_parsed("4 boneless pork chops", "boneless pork chops", UnitTag::Count, 1.0);
        assert_parsed("2 eggs", "eggs", UnitTag::Count, 1.0);
    }

    #[test]
    fn test_count_word_after_number_is_honored() {
        assert_parsed("2 cans kidney beans", "canned kidney beans", UnitTag::Count, 2.0);
        assert_parsed("1 bunch cilantro", "cilantro", UnitTag::Count, 1.0);
        assert_parsed("2 heads broccoli", "broccoli", UnitTag::Count, 2.0);
    }

    #[test]
    fn test_mixed_and_unicode_fractions() {
        assert_parsed("1 1/2 cups sugar", "sugar", UnitTag::Cup, 1.5);
        assert_parsed("¾ teaspoon nutmeg", "nutmeg", UnitTag::Teaspoon, 0.75);
        // A spaced glyph never joins the leading integer: the matcher
        // latches onto the glyph alone.
        assert_parsed("1 ½ teaspoons salt", "salt", UnitTag::Teaspoon, 0.5);
    }

    #[test]
    fn test_trailing_qualifiers_are_dropped_from_names() {
        // The simple matcher's number grammar has no bare-fraction arm, so
        // the first recognized number in "1/2" is the denominator.
        assert_parsed("1/2 cup sugar, divided", "sugar", UnitTag::Cup, 2.0);
        assert_parsed(
            "2 cups flour, plus more for dusting",
            "flour",
            UnitTag::Cup,
            2.0,
        );
    }

    #[test]
    fn test_cleaned_name_is_never_empty() {
        for line in ["2", "½", "2 cups", "1/2"] {
            let record = parse_ingredient(line);
            assert!(!record.name.is_empty(), "empty name for {:?}", line);
        }
    }

    #[test]
    fn test_pure_quantity_line_keeps_raw_text_as_name() {
        assert_parsed("2 cups", "cups", UnitTag::Cup, 2.0);
        let record = parse_ingredient("2");
        assert_eq!(record.name, "2");
    }

    #[test]
    fn test_batch_output_matches_input_order() {
        let lines = [
            "2 (6 ounce) cans tomato paste",
            "1 pound ground beef",
            "butter",
            "3 cloves garlic",
        ];
        let records = parse_ingredient_list(lines);

        assert_eq!(records.len(), lines.len());
        assert_eq!(records[0].name, "canned tomato paste");
        assert_eq!(records[1].name, "ground beef");
        assert_eq!(records[2].name, "butter");
        assert_eq!(records[3].name, "garlic");
    }

    #[test]
    fn test_unusual_input_never_panics() {
        for line in [
            "",
            "   ",
            "(((((",
            "1/0 cups flour",
            "🍅🍅🍅",
            "2 (½ fluid ounce) bottles vanilla",
            ", divided",
        ] {
            let record = parse_ingredient(line);
            assert_eq!(record.quantity_list.len(), 1, "line: {:?}", line);
        }
    }
}
