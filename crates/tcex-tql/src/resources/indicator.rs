//! Indicators.

use crate::filter::define_filter;

define_filter! {
    /// Filter for `/v3/indicators`.
    IndicatorFilter => Indicators {
        fields {
            active_locked: "activeLocked" => Boolean,
            address_asn: "addressAsn" => Integer,
            address_cidr: "addressCidr" => String,
            address_city: "addressCity" => String,
            address_country_code: "addressCountryCode" => String,
            address_country_name: "addressCountryName" => String,
            address_ip_val: "addressIpVal" => Integer,
            address_is_ipv6: "addressIsIpv6" => Boolean,
            address_registering_org: "addressRegisteringOrg" => String,
            address_state: "addressState" => String,
            address_timezone: "addressTimezone" => String,
            associated_group: "associatedGroup" => Integer,
            attribute: "attribute" => String,
            confidence: "confidence" => Integer,
            date_added: "dateAdded" => Date,
            description: "description" => String,
            false_positive_count: "falsePositiveCount" => Integer,
            file_size: "fileSize" => Integer,
            host_dns_active: "hostDnsActive" => Boolean,
            host_whois_active: "hostWhoisActive" => Boolean,
            id: "id" => Integer,
            indicator_active: "indicatorActive" => Boolean,
            last_false_positive: "lastFalsePositive" => Date,
            last_modified: "lastModified" => Date,
            last_observed: "lastObserved" => Date,
            observation_count: "observationCount" => Integer,
            owner: "owner" => Integer,
            owner_name: "ownerName" => String,
            rating: "rating" => Integer,
            security_label: "securityLabel" => String,
            source: "source" => String,
            summary: "summary" => String,
            tag: "tag" => String,
            tag_owner: "tagOwner" => Integer,
            tag_owner_name: "tagOwnerName" => String,
            threat_assess_score: "threatAssessScore" => Integer,
            r#type: "type" => Integer,
            type_name: "typeName" => String,
            value1: "value1" => String,
            value2: "value2" => String,
            value3: "value3" => String,
        }
        relations {
            has_artifact: "hasArtifact" => ArtifactFilter,
            has_attribute: "hasAttribute" => IndicatorAttributeFilter,
            has_case: "hasCase" => CaseFilter,
            has_group: "hasGroup" => GroupFilter,
            has_indicator: "hasIndicator" => IndicatorFilter,
            has_security_label: "hasSecurityLabel" => SecurityLabelFilter,
            has_tag: "hasTag" => TagFilter,
            has_victim: "hasVictim" => VictimFilter,
            has_victim_asset: "hasVictimAsset" => VictimAssetFilter,
        }
    }
}
