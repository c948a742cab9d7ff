error_chain! {
    foreign_links {
        Io(::std::io::Error);
        Req(::reqwest::Error) #[cfg(feature = "http-client")];
        Csv(::csv::Error);
        Url(::url::ParseError);
        Toml(::toml::de::Error);
    }

    errors {
        NonSuccessStatus(url: String, code: u16) {
            description("The status code of a received response was not success.")
            display("The status code of the response from {} was {} and not success.",
                     url, code)
        }

        ValueMissing(field: String) {
            description("A table cell expected on a municipality page was not found.")
            display("The '{}' cell is missing from the municipality page.", field)
        }

        InvalidNumber(text: String) {
            description("A table cell did not contain a valid count.")
            display("'{}' is not a valid count.", text)
        }

        NoPartyTallies {
            description("No party result rows were found on a municipality page.")
            display("No party result rows were found; the page layout does not match.")
        }

        NoMunicipalities(url: String) {
            description("A district page did not link any municipalities.")
            display("No municipalities were found on {}, check the URL.", url)
        }

        InvalidSourceUrl(url: String) {
            description("The given URL does not point to a district results page.")
            display("'{}' is not the URL of a district results page.", url)
        }

        EmptyOutputName {
            description("The output file name is empty.")
            display("The output file name must not be empty.")
        }

        InvalidSelector(selector: String) {
            description("An embedded CSS selector could not be parsed.")
            display("The CSS selector '{}' could not be parsed.", selector)
        }
    }
}
