//! Static display data for the landing page.
//!
//! Everything here is read-only sample content: no mutation, no identity
//! beyond "the selected index points into this list". The three animation
//! cycles (payment flow, recurring lifecycle, webhook statuses) live here
//! next to the data they choreograph.

use serde::{Deserialize, Serialize};

use crate::cycle::{Step, StepCycle};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroCopy {
    pub title: String,
    pub subtitle: String,
    pub badge: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub glyph: String,
    pub title: String,
    pub description: String,
    pub details: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub name: String,
    pub glyph: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acquirer {
    pub name: String,
    pub glyph: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FraudProvider {
    pub name: String,
    pub glyph: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    pub name: String,
    pub amount: String,
    pub interval: String,
    pub features: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    PastDue,
    Canceled,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: String,
    pub customer: String,
    pub plan: String,
    pub status: SubscriptionStatus,
    pub next_billing: Option<String>,
    pub created: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    pub description: String,
    pub code: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSample {
    pub language: String,
    pub caption: String,
    pub code: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardStatus {
    Approved,
    Processing,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardTransaction {
    pub id: String,
    pub amount: String,
    pub method: String,
    pub status: DashboardStatus,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assurance {
    pub glyph: String,
    pub title: String,
    pub detail: String,
}

pub fn hero() -> HeroCopy {
    HeroCopy {
        title: "Payment Infrastructure for Developers".into(),
        subtitle: "Build and scale your payment systems with our comprehensive toolkit. \
                   From transparent checkout to advanced fraud protection."
            .into(),
        badge: "uGo Facial Recognition Integration".into(),
    }
}

pub fn features() -> Vec<Feature> {
    let feature = |glyph: &str, title: &str, description: &str, details: [&str; 4]| Feature {
        glyph: glyph.into(),
        title: title.into(),
        description: description.into(),
        details: details.iter().map(|d| d.to_string()).collect(),
    };
    vec![
        feature(
            "🛡️",
            "Advanced Security",
            "PCI DSS Level 1 compliant with end-to-end encryption and tokenization",
            [
                "PCI DSS Level 1",
                "End-to-end encryption",
                "Token-based security",
                "Real-time monitoring",
            ],
        ),
        feature(
            "⚡",
            "Lightning Fast",
            "Process payments in milliseconds with our optimized infrastructure",
            [
                "Sub-100ms response times",
                "99.99% uptime SLA",
                "Global CDN",
                "Load balancing",
            ],
        ),
        feature(
            "⌨️",
            "Developer First",
            "RESTful APIs, SDKs, and comprehensive documentation for rapid integration",
            [
                "RESTful APIs",
                "Multiple SDKs",
                "Comprehensive docs",
                "Sandbox environment",
            ],
        ),
        feature(
            "🌐",
            "Global Reach",
            "Accept payments worldwide with local payment methods and currencies",
            [
                "150+ countries",
                "100+ currencies",
                "Local payment methods",
                "Multi-language support",
            ],
        ),
    ]
}

pub fn payment_methods() -> Vec<PaymentMethod> {
    vec![
        PaymentMethod {
            name: "Cartão de Crédito".into(),
            glyph: "💳".into(),
        },
        PaymentMethod {
            name: "PIX".into(),
            glyph: "📱".into(),
        },
    ]
}

pub fn acquirers() -> Vec<Acquirer> {
    [
        ("CIELO", "🏦"),
        ("REDE", "💳"),
        ("ADIQ", "🔷"),
        ("MERCADO PAGO", "💰"),
        ("CELLCOIN", "📱"),
        ("PINBANK", "🏧"),
        ("FISERV", "⚡"),
    ]
    .into_iter()
    .map(|(name, glyph)| Acquirer {
        name: name.into(),
        glyph: glyph.into(),
    })
    .collect()
}

pub fn fraud_providers() -> Vec<FraudProvider> {
    vec![
        FraudProvider {
            name: "ClearSale".into(),
            glyph: "🛡️".into(),
        },
        FraudProvider {
            name: "Cybersource".into(),
            glyph: "🔒".into(),
        },
    ]
}

/// Payment flow animation: entry → acquirer routing → antifraud → approved.
pub fn payment_flow_cycle() -> StepCycle {
    StepCycle::new(
        Step::new(
            "Entrada do Pagamento",
            "Cliente escolhe método de pagamento",
            3000,
        ),
        vec![
            Step::new("Seleção da Adquirente", "Sistema escolhe a melhor rota", 4000),
            Step::new(
                "Verificação Antifraude",
                "Análise de segurança em tempo real",
                3000,
            ),
            Step::new(
                "Pagamento Aprovado",
                "Transação concluída com sucesso",
                2000,
            ),
        ],
    )
}

/// Index of the acquirer-selection step inside [`payment_flow_cycle`], the
/// only step with an active sub-rotator.
pub const ACQUIRER_STEP: usize = 1;

/// Acquirer carousel interval while [`ACQUIRER_STEP`] is displayed.
pub const ACQUIRER_ROTATION_MS: u32 = 500;

/// Recurring payments animation: plan creation → subscription → status
/// management → full control.
pub fn recurring_cycle() -> StepCycle {
    StepCycle::new(
        Step::new(
            "Criação do Plano",
            "Defina valores, intervalos e benefícios de cada plano",
            4000,
        ),
        vec![
            Step::new(
                "Assinatura do Cliente",
                "Clientes assinam e a cobrança acontece sozinha",
                4000,
            ),
            Step::new(
                "Gestão de Status",
                "Acompanhe assinaturas ativas, em atraso e canceladas",
                6000,
            ),
            Step::new(
                "Controle Completo",
                "Pause, reative ou cancele assinaturas em um clique",
                4000,
            ),
        ],
    )
}

/// Staggered reveal delays within each recurring step: plans pop in during
/// step 0, subscriptions during step 1, the management views show at once.
pub fn recurring_reveal_delays(step: usize) -> Vec<u32> {
    match step {
        0 => vec![1000, 1000],
        1 => vec![1000, 1500],
        _ => vec![],
    }
}

/// Webhook status cycle for one simulated transaction.
pub fn webhook_cycle() -> StepCycle {
    StepCycle::new(
        Step::new(
            "PROCESSANDO",
            "Transação sendo processada pela adquirente",
            2000,
        ),
        vec![
            Step::new("AUTORIZADO", "Pagamento autorizado, aguardando captura", 2500),
            Step::new("PAGO", "Pagamento concluído com sucesso", 3000),
        ],
    )
}

/// Dwell after the final webhook delivery before a new transaction starts.
pub const WEBHOOK_COMPLETED_DWELL_MS: u32 = 2000;

pub fn plans() -> Vec<Plan> {
    vec![
        Plan {
            id: "plan_premium".into(),
            name: "Premium Monthly".into(),
            amount: "R$ 99,90".into(),
            interval: "monthly".into(),
            features: vec![
                "API Ilimitada".into(),
                "Suporte 24/7".into(),
                "Analytics Avançado".into(),
            ],
        },
        Plan {
            id: "plan_enterprise".into(),
            name: "Enterprise Yearly".into(),
            amount: "R$ 999,00".into(),
            interval: "yearly".into(),
            features: vec![
                "Tudo do Premium".into(),
                "SLA 99.9%".into(),
                "Manager Dedicado".into(),
            ],
        },
    ]
}

pub fn subscriptions() -> Vec<Subscription> {
    vec![
        Subscription {
            id: "sub_001".into(),
            customer: "João Silva".into(),
            plan: "Premium Monthly".into(),
            status: SubscriptionStatus::Active,
            next_billing: Some("2024-02-15".into()),
            created: "2024-01-15".into(),
        },
        Subscription {
            id: "sub_002".into(),
            customer: "Maria Santos".into(),
            plan: "Enterprise Yearly".into(),
            status: SubscriptionStatus::PastDue,
            next_billing: Some("2024-02-10".into()),
            created: "2024-01-10".into(),
        },
        Subscription {
            id: "sub_003".into(),
            customer: "Pedro Costa".into(),
            plan: "Premium Monthly".into(),
            status: SubscriptionStatus::Canceled,
            next_billing: None,
            created: "2024-01-05".into(),
        },
    ]
}

pub fn tools() -> Vec<Tool> {
    let tool = |name: &str, description: &str, code: &str| Tool {
        name: name.into(),
        description: description.into(),
        code: code.into(),
    };
    vec![
        tool(
            "Transparent Checkout",
            "Seamless payment experience without redirects",
            "paytools.checkout.create({\n  amount: 1000,\n  currency: 'BRL',\n  customer: customerId,\n  transparent: true\n});",
        ),
        tool(
            "Recurring Payments",
            "Automated subscription and billing management",
            "paytools.subscription.create({\n  customer: customerId,\n  plan: 'premium-monthly',\n  trial_days: 7\n});",
        ),
        tool(
            "Payment Links",
            "Generate secure payment links instantly",
            "paytools.links.create({\n  amount: 5000,\n  description: 'Premium Service',\n  expires_at: '2024-12-31'\n});",
        ),
        tool(
            "Product Catalog",
            "Manage your products and pricing centrally",
            "paytools.products.create({\n  name: 'Premium Plan',\n  price: 9900,\n  currency: 'BRL',\n  recurring: 'monthly'\n});",
        ),
    ]
}

pub fn checkout_samples() -> Vec<CodeSample> {
    let sample = |language: &str, caption: &str, code: &str| CodeSample {
        language: language.into(),
        caption: caption.into(),
        code: code.into(),
    };
    vec![
        sample(
            "JavaScript",
            "JavaScript/Node.js",
            "const response = await fetch('/api/transactions', {\n  method: 'POST',\n  headers: {\n    'Content-Type': 'application/json',\n    'Authorization': 'Bearer YOUR_API_KEY'\n  },\n  body: JSON.stringify({\n    amount: 10000, // R$ 100,00\n    currency: 'BRL',\n    payment_method: 'credit_card',\n    customer: {\n      name: 'João Silva',\n      email: 'joao@email.com'\n    }\n  })\n});\n\nconst transaction = await response.json();\nconsole.log(transaction.status); // 'approved'",
        ),
        sample(
            "Python",
            "Python",
            "import requests\n\nresponse = requests.post('/api/transactions',\n  headers={\n    'Content-Type': 'application/json',\n    'Authorization': 'Bearer YOUR_API_KEY'\n  },\n  json={\n    'amount': 10000,  # R$ 100,00\n    'currency': 'BRL',\n    'payment_method': 'credit_card',\n    'customer': {\n      'name': 'João Silva',\n      'email': 'joao@email.com'\n    }\n  }\n)\n\ntransaction = response.json()\nprint(transaction['status'])  # 'approved'",
        ),
        sample(
            "PHP",
            "PHP",
            "<?php\n$data = [\n    'amount' => 10000, // R$ 100,00\n    'currency' => 'BRL',\n    'payment_method' => 'credit_card',\n    'customer' => [\n        'name' => 'João Silva',\n        'email' => 'joao@email.com'\n    ]\n];\n\n$ch = curl_init('/api/transactions');\ncurl_setopt($ch, CURLOPT_POST, true);\ncurl_setopt($ch, CURLOPT_POSTFIELDS, json_encode($data));\n\n$response = curl_exec($ch);\n$transaction = json_decode($response, true);\necho $transaction['status']; // 'approved'",
        ),
        sample(
            "cURL",
            "cURL",
            "curl -X POST /api/transactions \\\n  -H \"Content-Type: application/json\" \\\n  -H \"Authorization: Bearer YOUR_API_KEY\" \\\n  -d '{\n    \"amount\": 10000,\n    \"currency\": \"BRL\",\n    \"payment_method\": \"credit_card\",\n    \"customer\": {\n      \"name\": \"João Silva\",\n      \"email\": \"joao@email.com\"\n    }\n  }'",
        ),
    ]
}

/// Webhook endpoint configuration snippet shown next to the delivery log.
pub fn webhook_config_example() -> String {
    "{\n  \"webhook_url\": \"https://sua-app.com/webhooks/pagamentos\",\n  \"events\": [\n    \"transaction.processing\",\n    \"transaction.authorized\",\n    \"transaction.paid\"\n  ],\n  \"secret\": \"webhook_secret_key\"\n}"
        .into()
}

pub fn dashboard_transactions() -> Vec<DashboardTransaction> {
    vec![
        DashboardTransaction {
            id: "TX001".into(),
            amount: "R$ 250,00".into(),
            method: "PIX".into(),
            status: DashboardStatus::Approved,
        },
        DashboardTransaction {
            id: "TX002".into(),
            amount: "R$ 1.299,99".into(),
            method: "Cartão".into(),
            status: DashboardStatus::Processing,
        },
        DashboardTransaction {
            id: "TX003".into(),
            amount: "R$ 89,90".into(),
            method: "PIX".into(),
            status: DashboardStatus::Approved,
        },
    ]
}

pub fn dashboard_metrics() -> Vec<Metric> {
    [
        ("98.9%", "Taxa de Sucesso"),
        ("0.8s", "Tempo Médio"),
        ("+247", "Hoje"),
    ]
    .into_iter()
    .map(|(value, label)| Metric {
        value: value.into(),
        label: label.into(),
    })
    .collect()
}

/// Stat tiles shown on the final step of the payment-flow animation.
pub fn approval_metrics() -> Vec<Metric> {
    [
        ("1.2s", "Tempo Total"),
        ("CIELO", "Adquirente"),
        ("Aprovada", "Análise Antifraude"),
    ]
    .into_iter()
    .map(|(value, label)| Metric {
        value: value.into(),
        label: label.into(),
    })
    .collect()
}

/// Metrics panel for the full-control step of the recurring animation.
pub fn recurring_metrics() -> Vec<Metric> {
    [
        ("R$ 12.450", "MRR"),
        ("156", "Assinaturas Ativas"),
        ("2.1%", "Churn Mensal"),
    ]
    .into_iter()
    .map(|(value, label)| Metric {
        value: value.into(),
        label: label.into(),
    })
    .collect()
}

pub fn assurances() -> Vec<Assurance> {
    [
        ("🔒", "PCI DSS Nível 1", "Certificação máxima de segurança de dados"),
        ("⚡", "99.99% de Uptime", "Infraestrutura redundante em múltiplas regiões"),
        ("🤝", "Suporte 24/7", "Time técnico disponível em todos os planos"),
    ]
    .into_iter()
    .map(|(glyph, title, detail)| Assurance {
        glyph: glyph.into(),
        title: title.into(),
        detail: detail.into(),
    })
    .collect()
}

/// Remote logo assets; the footer logo swaps them on theme broadcasts.
pub const LOGO_DARK_URL: &str = "https://customer-assets.emergentagent.com/job_paytools-gateway/artifacts/doathdfz_Group%202%281%29.png";
pub const LOGO_LIGHT_URL: &str = "https://customer-assets.emergentagent.com/job_paytools-gateway/artifacts/847hwine_Group%201%281%29.png";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_lists_match_the_animation_constants() {
        assert_eq!(acquirers().len(), 7);
        assert_eq!(fraud_providers().len(), 2);
        assert_eq!(payment_methods().len(), 2);
        assert!(ACQUIRER_STEP < payment_flow_cycle().len());
    }

    #[test]
    fn cycles_have_the_documented_durations() {
        let durations: Vec<u32> = payment_flow_cycle()
            .steps()
            .iter()
            .map(|s| s.duration_ms)
            .collect();
        assert_eq!(durations, [3000, 4000, 3000, 2000]);

        let durations: Vec<u32> = recurring_cycle()
            .steps()
            .iter()
            .map(|s| s.duration_ms)
            .collect();
        assert_eq!(durations, [4000, 4000, 6000, 4000]);
        assert!(
            recurring_cycle()
                .steps()
                .iter()
                .all(|s| !s.detail.is_empty()),
            "the recurring step list renders label and detail from the cycle",
        );

        let durations: Vec<u32> = webhook_cycle()
            .steps()
            .iter()
            .map(|s| s.duration_ms)
            .collect();
        assert_eq!(durations, [2000, 2500, 3000]);
    }

    #[test]
    fn subscription_statuses_serialize_snake_case() {
        assert_eq!(
            serde_json::to_string(&SubscriptionStatus::PastDue).unwrap(),
            "\"past_due\""
        );
    }

    #[test]
    fn reveal_delays_only_exist_for_the_build_up_steps() {
        assert_eq!(recurring_reveal_delays(0).len(), 2);
        assert_eq!(recurring_reveal_delays(1).len(), 2);
        assert!(recurring_reveal_delays(2).is_empty());
        assert!(recurring_reveal_delays(3).is_empty());
    }
}
