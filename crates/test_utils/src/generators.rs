//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data that
//! maintains domain invariants. Document strategies compute their check
//! digits independently of the validators under test, so they double as a
//! second implementation of the checksum rules.

use proptest::prelude::*;

use domain_partner::{AddressInput, RegistrationRequest, PERSONAL_EMAIL_DOMAINS};

const CNPJ_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

fn check_digit(digits: &[u8], weights: &[u32]) -> u8 {
    let sum: u32 = digits
        .iter()
        .zip(weights)
        .map(|(&digit, &weight)| u32::from(digit) * weight)
        .sum();
    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        (11 - remainder) as u8
    }
}

fn digits_to_string(digits: &[u8]) -> String {
    digits.iter().map(|d| (d + b'0') as char).collect()
}

/// Strategy for generating CNPJ strings with valid check digits
pub fn cnpj_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(0u8..10, 12).prop_filter_map(
        "degenerate repeated sequence",
        |mut digits| {
            digits.push(check_digit(&digits, &CNPJ_FIRST_WEIGHTS));
            let second = check_digit(&digits, &CNPJ_SECOND_WEIGHTS);
            digits.push(second);
            if digits.iter().all(|&d| d == digits[0]) {
                return None;
            }
            Some(digits_to_string(&digits))
        },
    )
}

/// Strategy for generating CPF strings with valid check digits
pub fn cpf_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(0u8..10, 9).prop_filter_map(
        "degenerate repeated sequence",
        |mut digits| {
            let first_weights: Vec<u32> = (2..=10).rev().collect();
            digits.push(check_digit(&digits, &first_weights));
            let second_weights: Vec<u32> = (2..=11).rev().collect();
            let second = check_digit(&digits, &second_weights);
            digits.push(second);
            if digits.iter().all(|&d| d == digits[0]) {
                return None;
            }
            Some(digits_to_string(&digits))
        },
    )
}

/// Strategy for generating eight-digit zip codes
pub fn zip_code_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(0u8..10, 8).prop_map(|digits| digits_to_string(&digits))
}

/// Strategy for generating Brazilian state codes
pub fn state_strategy() -> impl Strategy<Value = String> {
    proptest::sample::select(vec!["SP", "RJ", "MG", "RS", "PR", "BA", "PE", "CE"])
        .prop_map(|uf| uf.to_string())
}

/// Strategy for generating addresses on known personal-webmail domains
pub fn personal_email_strategy() -> impl Strategy<Value = String> {
    ("[a-z][a-z0-9]{2,11}", proptest::sample::select(PERSONAL_EMAIL_DOMAINS))
        .prop_map(|(local, domain)| format!("{local}@{domain}"))
}

/// Strategy for generating addresses on company domains
pub fn corporate_email_strategy() -> impl Strategy<Value = String> {
    ("[a-z][a-z0-9]{2,11}", "[a-z]{3,12}")
        .prop_filter_map("generated domain is a personal provider", |(local, company)| {
            let domain = format!("{company}.com.br");
            if PERSONAL_EMAIL_DOMAINS.contains(&domain.as_str()) {
                return None;
            }
            Some(format!("{local}@{domain}"))
        })
}

fn address_input_strategy() -> impl Strategy<Value = AddressInput> {
    (
        zip_code_strategy(),
        state_strategy(),
        proptest::sample::select(vec!["São Paulo", "Rio de Janeiro", "Belo Horizonte", "Curitiba"]),
        proptest::sample::select(vec!["Avenida Paulista", "Rua Augusta", "Avenida Rio Branco"]),
        1u32..10_000,
        proptest::sample::select(vec!["Centro", "Bela Vista", "Savassi", "Batel"]),
    )
        .prop_map(|(zip_code, state, city, street, number, neighborhood)| AddressInput {
            zip_code,
            state,
            city: city.to_string(),
            street: street.to_string(),
            number: number.to_string(),
            neighborhood: neighborhood.to_string(),
            complement: None,
        })
}

/// Strategy for generating valid legal-person registration requests
pub fn legal_person_request_strategy() -> impl Strategy<Value = RegistrationRequest> {
    (
        cnpj_strategy(),
        prop_oneof![corporate_email_strategy(), personal_email_strategy()],
        address_input_strategy(),
        proptest::sample::select(vec!["Empresa Exemplo Ltda", "Comercial Andrade ME", "Logística Sul SA"]),
    )
        .prop_map(|(document, email, address, name)| RegistrationRequest {
            name: name.to_string(),
            document,
            email,
            phone: "+55 11 91234-5678".to_string(),
            address,
            observations: None,
        })
}

/// Strategy for generating valid natural-person registration requests
pub fn natural_person_request_strategy() -> impl Strategy<Value = RegistrationRequest> {
    (
        cpf_strategy(),
        prop_oneof![corporate_email_strategy(), personal_email_strategy()],
        address_input_strategy(),
        proptest::sample::select(vec!["Leonardo Santos", "Ana Oliveira", "Carlos Pereira"]),
    )
        .prop_map(|(document, email, address, name)| RegistrationRequest {
            name: name.to_string(),
            document,
            email,
            phone: "+55 11 99876-5432".to_string(),
            address,
            observations: None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_partner::{Cnpj, Cpf, Email, Partner};

    proptest! {
        #[test]
        fn generated_cnpjs_validate(raw in cnpj_strategy()) {
            let cnpj = Cnpj::new(&raw).unwrap();
            prop_assert_eq!(cnpj.as_str(), raw);
        }

        #[test]
        fn generated_cpfs_validate(raw in cpf_strategy()) {
            let cpf = Cpf::new(&raw).unwrap();
            prop_assert_eq!(cpf.as_str(), raw);
        }

        #[test]
        fn personal_emails_classify_as_personal(raw in personal_email_strategy()) {
            let email = Email::new(&raw).unwrap();
            prop_assert!(!email.is_corporate());
        }

        #[test]
        fn corporate_emails_classify_as_corporate(raw in corporate_email_strategy()) {
            let email = Email::new(&raw).unwrap();
            prop_assert!(email.is_corporate());
        }

        #[test]
        fn generated_legal_person_requests_register(request in legal_person_request_strategy()) {
            let partner = Partner::new_legal_person(request).unwrap();
            prop_assert!(partner.is_legal_person());
        }

        #[test]
        fn generated_natural_person_requests_register(request in natural_person_request_strategy()) {
            let partner = Partner::new_natural_person(request).unwrap();
            prop_assert!(partner.is_natural_person());
        }
    }
}
