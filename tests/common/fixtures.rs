use deckline::Campaign;
use serde_json::{Value, json};

fn icp(number: u32, title: &str, roles: usize) -> Value {
    let key_roles: Vec<String> = [
        "CISO",
        "VP Security Operations",
        "SOC Manager",
        "Director of IT",
        "Security Architect",
        "Threat Intel Lead",
        "CIO",
        "Compliance Officer",
    ]
    .iter()
    .take(roles)
    .map(|r| r.to_string())
    .collect();

    json!({
        "icp_number": number,
        "title": title,
        "industries": ["Financial Services", "Healthcare", "Retail"],
        "departments_and_functions": "Security Operations, IT Infrastructure, Risk & Compliance",
        "key_roles": key_roles,
        "technographic_fit": {
            "displacement_signals": [
                {
                    "pain_explanation": "Legacy SIEM with rising ingest costs and slow detection",
                    "vendor_products": ["IBM QRadar", "ArcSight"]
                },
                { "pain_explanation": "On-prem log retention limits", "vendor_products": ["Splunk"] },
                { "pain_explanation": "Manual triage", "vendor_products": [] }
            ],
            "expansion_signals": [
                {
                    "readiness_explanation": "Cloud migration underway",
                    "vendor_products": ["AWS Security Hub"]
                }
            ]
        }
    })
}

/// Acme selling Widgets, with one 8-role and one 7-role ICP.
pub fn acme_campaign() -> Campaign {
    let value = json!({
        "customer_name": "Acme",
        "solution_name": "Widgets",
        "campaign_date": "March 2025",
        "icps": [
            icp(1, "Mid-market banks modernising security operations", 8),
            icp(2, "Regional insurers", 7)
        ]
    });
    serde_json::from_value(value).expect("fixture campaign is valid")
}

/// Research output as written by the ICP step: customer details nested under
/// `campaign_info` and departments as a single string.
#[allow(dead_code)]
pub const RESEARCH_OUTPUT_JSON: &str = r#"{
  "campaign_info": {
    "customer_name": "Sample Technology Vendor",
    "solution_name": "Cloud Security Platform",
    "campaign_date": "2025-01-10"
  },
  "icps": [
    {
      "icp_number": 1,
      "title": "Security Operations Center Leader",
      "industries": ["Financial Services", "Healthcare", "Government"],
      "departments_and_functions": "Security Operations, Threat Intelligence, Incident Response",
      "key_roles": [
        "CISO",
        "Head of Security Operations",
        "SOC Manager",
        "Security Architect"
      ],
      "technographic_fit": {
        "displacement_signals": [
          {
            "pain_explanation": "Managing multiple disconnected security tools without centralized visibility",
            "vendor_products": ["Splunk ES", "QRadar", "ArcSight"]
          }
        ],
        "expansion_signals": [
          {
            "readiness_explanation": "Recently deployed cloud infrastructure requiring unified security monitoring",
            "vendor_products": ["AWS Security Hub", "Azure Sentinel"]
          }
        ]
      }
    },
    {
      "icp_number": 2,
      "title": "Cloud Infrastructure Security Lead",
      "industries": ["Technology", "E-commerce", "SaaS"],
      "departments_and_functions": "Cloud Security, DevSecOps, Platform Engineering",
      "key_roles": [
        "VP Cloud Security",
        "Head of DevSecOps",
        "Cloud Architect",
        "Security Engineer"
      ],
      "technographic_fit": {
        "displacement_signals": [
          {
            "pain_explanation": "Using legacy security tools not designed for cloud-native environments",
            "vendor_products": ["Trend Micro Deep Security", "McAfee MVISION"]
          }
        ],
        "expansion_signals": [
          {
            "readiness_explanation": "Adopting containerization and microservices architectures",
            "vendor_products": ["Kubernetes", "Docker", "ECS"]
          }
        ]
      }
    }
  ]
}"#;
