use roxmltree::{Document, Node};

use crate::core::ParseError;

/// Namespace of the 13F information table schema.
pub(crate) const INFO_TABLE_NS: &str =
    "http://www.sec.gov/edgar/document/thirteenf/informationtable";

const ROOT: &str = "informationTable";
const RECORD: &str = "infoTable";

// Raw text of one `infoTable` element. Everything is optional here; defaults are applied
// when mapping to `HoldingRecord`.
#[derive(Debug, Default)]
pub(crate) struct InfoTableNode {
    pub(crate) name_of_issuer: Option<String>,
    pub(crate) title_of_class: Option<String>,
    pub(crate) cusip: Option<String>,
    pub(crate) value: Option<String>,
    pub(crate) ssh_prnamt: Option<String>,
    pub(crate) ssh_prnamt_type: Option<String>,
    pub(crate) put_call: Option<String>,
    pub(crate) investment_discretion: Option<String>,
    pub(crate) voting_sole: Option<String>,
    pub(crate) voting_shared: Option<String>,
    pub(crate) voting_none: Option<String>,
}

fn child<'a, 'i>(node: Node<'a, 'i>, name: &str) -> Option<Node<'a, 'i>> {
    node.children().find(|c| {
        c.is_element() && c.tag_name().name() == name && c.tag_name().namespace() == Some(INFO_TABLE_NS)
    })
}

fn text(node: Option<Node<'_, '_>>) -> Option<String> {
    node.and_then(|n| n.text()).map(str::to_string)
}

fn read_record(node: Node<'_, '_>) -> InfoTableNode {
    let amount = child(node, "shrsOrPrnAmt");
    let voting = child(node, "votingAuthority");
    InfoTableNode {
        name_of_issuer: text(child(node, "nameOfIssuer")),
        title_of_class: text(child(node, "titleOfClass")),
        cusip: text(child(node, "cusip")),
        value: text(child(node, "value")),
        ssh_prnamt: text(amount.and_then(|a| child(a, "sshPrnamt"))),
        ssh_prnamt_type: text(amount.and_then(|a| child(a, "sshPrnamtType"))),
        put_call: text(child(node, "putCall")),
        investment_discretion: text(child(node, "investmentDiscretion")),
        voting_sole: text(voting.and_then(|v| child(v, "Sole"))),
        voting_shared: text(voting.and_then(|v| child(v, "Shared"))),
        voting_none: text(voting.and_then(|v| child(v, "None"))),
    }
}

/// Checks the root element and collects every `infoTable` record beneath it.
pub(crate) fn read_document(xml: &str) -> Result<Vec<InfoTableNode>, ParseError> {
    let doc = Document::parse(xml).map_err(|e| ParseError::Malformed(e.to_string()))?;
    let root = doc.root_element();

    if root.tag_name().name() != ROOT {
        return Err(ParseError::UnexpectedRoot {
            found: root.tag_name().name().to_string(),
        });
    }
    if root.tag_name().namespace() != Some(INFO_TABLE_NS) {
        return Err(ParseError::WrongNamespace {
            found: root.tag_name().namespace().map(str::to_string),
        });
    }

    Ok(root
        .children()
        .filter(|c| {
            c.is_element()
                && c.tag_name().name() == RECORD
                && c.tag_name().namespace() == Some(INFO_TABLE_NS)
        })
        .map(read_record)
        .collect())
}
