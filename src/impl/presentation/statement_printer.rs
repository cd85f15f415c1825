use chrono::{Duration, NaiveDate};
use iso_currency::Currency;

use crate::{
    entities::{Allocation, BillingResult, PropertyProfile, TenantShareInput},
    presentation::utils::{format_amount, format_date},
};

const CURRENCY: Currency = Currency::EUR;
const PAYMENT_TERM_DAYS: i64 = 30;
const TABLE_WIDTH: usize = 93;

const RECEIPT_INSPECTION_NOTICE: &str = "Die dieser Abrechnung zugrunde liegenden Belege \
     können nach vorheriger Terminvereinbarung beim Vermieter eingesehen werden.";
const OBJECTION_PERIOD_NOTICE: &str = "Einwendungen gegen diese Abrechnung sind dem \
     Vermieter spätestens zwölf Monate nach Zugang in Textform mitzuteilen. Nach Ablauf \
     dieser Frist gilt die Abrechnung als anerkannt.";

pub(crate) struct StatementPrinter;

impl StatementPrinter {
    pub(crate) fn new() -> Self {
        Self
    }

    /// Serialize a completed billing result into the statement document.
    /// Single linear pass; the section order is the compatibility
    /// contract of the printed statement.
    pub(crate) fn print_statement(
        &self,
        profile: &PropertyProfile,
        tenant: &TenantShareInput,
        result: &BillingResult,
        issue_date: NaiveDate,
    ) -> String {
        let mut out = String::new();

        self.print_header(&mut out, profile, tenant);
        self.print_title(&mut out, result);
        self.print_property(&mut out, profile);
        self.print_distribution(&mut out, profile, tenant, result);
        self.print_period(&mut out, result);
        self.print_cost_table(&mut out, profile, result);
        self.print_prepayments(&mut out, tenant, result);
        self.print_final_balance(&mut out, result);
        self.print_due_date(&mut out, issue_date);
        self.print_legal_notices(&mut out);

        out
    }

    fn print_header(&self, out: &mut String, profile: &PropertyProfile, tenant: &TenantShareInput) {
        out.push_str(&format!("{}\n", profile.owner_name));
        // The landlord address falls back to the property address.
        out.push_str(&format!(
            "{}\n",
            profile.owner_address.as_deref().unwrap_or(&profile.address)
        ));
        if let Some(contact) = &profile.owner_contact {
            out.push_str(&format!("{}\n", contact));
        }
        out.push('\n');
        out.push_str("An:\n");
        out.push_str(&format!("{}\n{}\n\n", tenant.name, tenant.address));
    }

    fn print_title(&self, out: &mut String, result: &BillingResult) {
        out.push_str(&format!(
            "Betriebskostenabrechnung für das Jahr {}\n",
            result.year
        ));
        out.push_str(&format!("{}\n\n", "=".repeat(TABLE_WIDTH)));
    }

    fn print_property(&self, out: &mut String, profile: &PropertyProfile) {
        out.push_str(&format!("Objekt: {}, {}\n\n", profile.name, profile.address));
    }

    fn print_distribution(
        &self,
        out: &mut String,
        profile: &PropertyProfile,
        tenant: &TenantShareInput,
        result: &BillingResult,
    ) {
        out.push_str(&format!(
            "Verteilerschlüssel: {}\n",
            profile.distribution_key.label()
        ));
        match result.allocation.resolved() {
            Some(allocation) => {
                out.push_str(&format!(
                    "Ihr Anteil: {:.2} {} von {:.2} {}\n",
                    allocation.effective_share_value,
                    profile.distribution_key.unit_label(),
                    allocation.divisor,
                    profile.distribution_key.unit_label(),
                ));
                out.push_str(&format!(
                    "Anteilsberechnung: {:.2} % = {:.2} / {:.2}\n\n",
                    allocation.share_percent,
                    allocation.effective_share_value,
                    allocation.divisor,
                ));
            }
            None => {
                out.push_str(&format!(
                    "Ihr Anteil: {:.2} {}\n",
                    tenant.share_value,
                    profile.distribution_key.unit_label(),
                ));
                out.push_str(
                    "Keine Umlage möglich, bitte vervollständigen Sie die Objektdaten.\n\n",
                );
            }
        }
    }

    fn print_period(&self, out: &mut String, result: &BillingResult) {
        out.push_str(&format!(
            "Abrechnungszeitraum: 01.01.{year} – 31.12.{year}\n\n",
            year = result.year
        ));
    }

    fn print_cost_table(&self, out: &mut String, profile: &PropertyProfile, result: &BillingResult) {
        let key_label = match result.allocation {
            Allocation::Resolved(_) => profile.distribution_key.label(),
            Allocation::Unresolvable => "Nicht definiert",
        };

        out.push_str(&format!(
            "{:>3}  {:<36} {:>14}  {:<20} {:>14}\n",
            "Nr.", "Kostenart", "Gesamtkosten", "Schlüssel", "Ihr Anteil"
        ));
        out.push_str(&format!("{}\n", "-".repeat(TABLE_WIDTH)));
        for (i, share) in result.category_shares.iter().enumerate() {
            out.push_str(&format!(
                "{:>3}  {:<36} {:>14}  {:<20} {:>14}\n",
                i + 1,
                share.category.label(),
                format_amount(share.total_amount, CURRENCY),
                key_label,
                format_amount(share.tenant_share, CURRENCY),
            ));
        }
        out.push_str(&format!("{}\n", "-".repeat(TABLE_WIDTH)));

        let tenant_share_sum: f64 = result.category_shares.iter().map(|s| s.tenant_share).sum();
        out.push_str(&format!(
            "{:>3}  {:<36} {:>14}  {:<20} {:>14}\n",
            "",
            "Summe",
            format_amount(result.total_cost, CURRENCY),
            "",
            format_amount(tenant_share_sum, CURRENCY),
        ));
        out.push_str(&format!("{}\n\n", "-".repeat(TABLE_WIDTH)));
    }

    fn print_prepayments(&self, out: &mut String, tenant: &TenantShareInput, result: &BillingResult) {
        // Prepayments are a deduction, so the value prints negated.
        out.push_str(&format!(
            "{:<78}{:>15}\n",
            format!(
                "Vorauszahlungen ({} × {} Monate)",
                format_amount(tenant.monthly_prepayment, CURRENCY),
                tenant.months_prepaid
            ),
            format_amount(-result.prepayment_total, CURRENCY),
        ));
        out.push_str(&format!("{}\n\n", "-".repeat(TABLE_WIDTH)));
    }

    fn print_final_balance(&self, out: &mut String, result: &BillingResult) {
        match result.allocation.resolved() {
            Some(allocation) => {
                out.push_str(&format!(
                    "{:<78}{:>15}\n",
                    "Endbetrag",
                    format_amount(allocation.final_balance, CURRENCY),
                ));
                let verdict = if allocation.final_balance > 0.0 {
                    "Nachzahlung zu Ihren Lasten."
                } else if allocation.final_balance < 0.0 {
                    "Guthaben zu Ihren Gunsten."
                } else {
                    "Die Abrechnung ist ausgeglichen."
                };
                out.push_str(&format!("{}\n\n", verdict));
            }
            None => {
                // Distinct from a zero balance: nothing could be
                // allocated, so there is no balance to settle.
                out.push_str("Endbetrag: keine Umlage möglich.\n\n");
            }
        }
    }

    fn print_due_date(&self, out: &mut String, issue_date: NaiveDate) {
        let due_date = issue_date + Duration::days(PAYMENT_TERM_DAYS);
        out.push_str(&format!("Zahlbar bis: {}\n\n", format_date(due_date)));
    }

    fn print_legal_notices(&self, out: &mut String) {
        for notice in [RECEIPT_INSPECTION_NOTICE, OBJECTION_PERIOD_NOTICE] {
            for line in textwrap::wrap(notice, 74) {
                out.push_str(&format!("{}\n", line));
            }
            out.push('\n');
        }
    }
}
