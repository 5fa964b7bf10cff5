// --- Tabelas de Referência ---

/// Unidades Federativas do Brasil: 26 estados mais o Distrito Federal.
/// A ordem é fixa e determina a ordem de escrita das entradas no ZIP.
pub const ESTADOS: [&str; 27] = [
    "AC", "AL", "AP", "AM", "BA", "CE", "DF", "ES", "GO", "MA", "MT", "MS", "MG", "PA", "PB", "PR",
    "PE", "PI", "RJ", "RN", "RS", "RO", "RR", "SC", "SP", "SE", "TO",
];

/// Chaves de empresa aceitas por [`get_empresa`].
pub const CHAVES_DE_EMPRESAS: [&str; 4] = ["software", "online", "ip", "internacional"];

/// Dados cadastrais de um estabelecimento do grupo.
///
/// Todos os campos são literais gravados no binário e entram sem qualquer
/// transformação nos registros 0000 e 0005 do modelo.
#[derive(Debug, Clone, Copy)]
pub struct Empresa {
    pub cnpj: &'static str,
    pub nome_empresa: &'static str,
    pub nome_fantasia: &'static str,
    pub endereco: &'static str,
    pub cep: &'static str,
    pub cod_mun: &'static str,
    pub uf: &'static str,
}

const BEETELLER_SOFTWARE: Empresa = Empresa {
    cnpj: "38077404000156",
    nome_empresa: "BEETELLER SOFTWARE LTDA",
    nome_fantasia: "BEETELLER ID",
    endereco: "RUA OTACILIO NEPONUCENO 600 SALA 907",
    cep: "58410653",
    cod_mun: "2504009",
    uf: "PB",
};

const BEETELLER_ONLINE: Empresa = Empresa {
    cnpj: "53191107000120",
    nome_empresa: "BEETELLER PAGAMENTOS ONLINE LTDA",
    nome_fantasia: "BEETELLER PAY",
    endereco: "AV AFONSO PENA 5723 SALA 1805",
    cep: "79031010",
    cod_mun: "5002704",
    uf: "MS",
};

const BEETELLER_IP: Empresa = Empresa {
    cnpj: "32074986000130",
    nome_empresa: "BEETELLER INSTITUICAO DE PAGAMENTO LTDA LTDA",
    nome_fantasia: "BEETELLER BANK",
    endereco: "AV AFONSO PENA 5723 SALA 1805",
    cep: "79031010",
    cod_mun: "5002704",
    uf: "MS",
};

const BEETELLER_INTERNACIONAL: Empresa = Empresa {
    cnpj: "38163054000140",
    nome_empresa: "BEETELLER PAGAMENTOS INTERNACIONAIS LTDA",
    nome_fantasia: "BEETELLER INTERNACIONAL",
    endereco: "RUA OTACILIO NEPONUCENO 600 SALA 907",
    cep: "58410653",
    cod_mun: "2504009",
    uf: "PB",
};

/// Cadastro da empresa associada à chave, ou `None` para chave desconhecida.
pub fn get_empresa(chave: &str) -> Option<&'static Empresa> {
    match chave {
        "software" => Some(&BEETELLER_SOFTWARE),
        "online" => Some(&BEETELLER_ONLINE),
        "ip" => Some(&BEETELLER_IP),
        "internacional" => Some(&BEETELLER_INTERNACIONAL),
        _ => None,
    }
}

/// Nomes dos meses do calendário civil.
/// Otimizado para não usar memória RAM (armazenado no binário)
pub fn get_nome_do_mes(codigo: &str) -> &'static str {
    match codigo {
        "01" => "Janeiro",
        "02" => "Fevereiro",
        "03" => "Março",
        "04" => "Abril",
        "05" => "Maio",
        "06" => "Junho",
        "07" => "Julho",
        "08" => "Agosto",
        "09" => "Setembro",
        "10" => "Outubro",
        "11" => "Novembro",
        "12" => "Dezembro",
        _ => "Mês Desconhecido",
    }
}

/// Modelo base dos arquivos gerados.
///
/// O leiaute é fixo: apenas os campos entre chaves são substituídos.
/// Todo o restante (delimitadores, contadores dos registros 9900, contato do
/// registro 0005 e totalizadores 9990/9999) é parte literal do formato.
pub const MODELO_BASE: &str = r"|0000|09|4|{estado}|{cnpj}|{nome_empresa}|{data_ini}|{data_fim}|1|{competencia}|
|0001|1|
|0005|{nome_fantasia}|{endereco}|{cep}|{cod_mun}|{uf}|LUCAS RENNAN LEONEL LUBRIGATI|6740423050|LUCAS.LUBRIGATI@BEETELLER.COM|
|0990|4|
|1001|0|
|1990|2|
|9001|1|
|9900|0000|1|
|9900|0001|1|
|9900|0005|1|
|9900|0006|0|
|9900|0990|1|
|9900|1001|1|
|9900|1990|1|
|9900|9001|1|
|9900|9900|11|
|9900|9990|1|
|9900|9999|1|
|9990|14|
|9999|20|";

#[cfg(test)]
mod tests {
    use super::{CHAVES_DE_EMPRESAS, ESTADOS, MODELO_BASE, get_empresa, get_nome_do_mes};
    use std::collections::HashSet;

    #[test]
    fn estados_cobrem_todas_as_unidades_federativas() {
        assert_eq!(ESTADOS.len(), 27);

        let unicos: HashSet<&str> = ESTADOS.iter().copied().collect();
        assert_eq!(unicos.len(), 27);
    }

    #[test]
    fn toda_chave_de_empresa_resolve_um_cadastro_valido() {
        for chave in CHAVES_DE_EMPRESAS {
            let empresa = get_empresa(chave).unwrap();

            assert_eq!(empresa.cnpj.len(), 14);
            assert!(empresa.cnpj.chars().all(|c| c.is_ascii_digit()));
            assert_eq!(empresa.cep.len(), 8);
            assert_eq!(empresa.cod_mun.len(), 7);
            assert!(ESTADOS.contains(&empresa.uf));
        }

        assert!(get_empresa("pagamentos").is_none());
    }

    #[test]
    fn modelo_base_tem_o_leiaute_fixo_de_20_registros() {
        assert_eq!(MODELO_BASE.lines().count(), 20);
        assert!(
            MODELO_BASE
                .lines()
                .all(|linha| linha.starts_with('|') && linha.ends_with('|'))
        );
    }

    #[test]
    fn nomes_dos_meses() {
        assert_eq!(get_nome_do_mes("01"), "Janeiro");
        assert_eq!(get_nome_do_mes("12"), "Dezembro");
        assert_eq!(get_nome_do_mes("99"), "Mês Desconhecido");
    }
}
